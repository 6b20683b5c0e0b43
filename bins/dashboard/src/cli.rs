//! Command line parsing.

use anyhow::{Context, Result, anyhow, bail};
use cashflow_client::PaymentQuery;
use chrono::NaiveDate;
use uuid::Uuid;

/// Usage text printed by `help` and on parse errors.
pub const USAGE: &str = "\
Usage: cashflow <command> [args]

Commands:
  overview                         Summary, payments and inventory at once
  summary [START] [END]            Cash flow summary (dates as YYYY-MM-DD)
  payments [--limit N] [--direction inbound|outbound] [--status S]
  regenerate [COUNT]               Replace backend test payments
  inventory [--category C]         List inventory
  sell ITEM_ID QUANTITY            Record a sale
  ask QUESTION...                  Ask the copilot
  copilot-status                   Is the copilot configured?
  health                           Backend liveness
  settings                         Backend public settings
  help                             Show this message";

/// A parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Summary, payments and inventory fetched concurrently.
    Overview,
    /// Cash flow summary.
    Summary {
        /// Range start.
        start: Option<NaiveDate>,
        /// Range end.
        end: Option<NaiveDate>,
    },
    /// Payment list.
    Payments(PaymentQuery),
    /// Regenerate test payments.
    Regenerate {
        /// Number of payments.
        count: Option<u32>,
    },
    /// Inventory list.
    Inventory {
        /// Category filter.
        category: Option<String>,
    },
    /// Record a sale.
    Sell {
        /// Item sold.
        item_id: Uuid,
        /// Units sold, at least one.
        quantity: i64,
    },
    /// Ask the copilot.
    Ask {
        /// Trimmed, non-empty question.
        question: String,
    },
    /// Copilot configuration.
    CopilotStatus,
    /// Backend liveness.
    Health,
    /// Backend settings.
    Settings,
    /// Print usage.
    Help,
}

/// Parses arguments, excluding the program name.
pub fn parse(args: &[String]) -> Result<Command> {
    let Some((name, rest)) = args.split_first() else {
        return Ok(Command::Overview);
    };

    match name.as_str() {
        "overview" => Ok(Command::Overview),
        "summary" => parse_summary(rest),
        "payments" => parse_payments(rest),
        "regenerate" => {
            let count = rest
                .first()
                .map(|raw| raw.parse::<u32>().with_context(|| format!("invalid count: {raw}")))
                .transpose()?;
            Ok(Command::Regenerate { count })
        }
        "inventory" => {
            let mut category = None;
            let mut iter = rest.iter();
            while let Some(flag) = iter.next() {
                match flag.as_str() {
                    "--category" => category = Some(flag_value(flag, iter.next())?.to_string()),
                    other => bail!("unknown flag for inventory: {other}"),
                }
            }
            Ok(Command::Inventory { category })
        }
        "sell" => parse_sell(rest),
        "ask" => {
            let question = rest.join(" ").trim().to_string();
            if question.is_empty() {
                bail!("ask needs a question");
            }
            Ok(Command::Ask { question })
        }
        "copilot-status" => Ok(Command::CopilotStatus),
        "health" => Ok(Command::Health),
        "settings" => Ok(Command::Settings),
        "help" | "--help" | "-h" => Ok(Command::Help),
        other => Err(anyhow!("unknown command: {other}")),
    }
}

fn parse_summary(rest: &[String]) -> Result<Command> {
    let date = |raw: &String| {
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").with_context(|| format!("invalid date: {raw}"))
    };
    if rest.len() > 2 {
        bail!("summary takes at most two dates");
    }
    Ok(Command::Summary {
        start: rest.first().map(date).transpose()?,
        end: rest.get(1).map(date).transpose()?,
    })
}

fn parse_payments(rest: &[String]) -> Result<Command> {
    let mut query = PaymentQuery::new();
    let mut iter = rest.iter();
    while let Some(flag) = iter.next() {
        let value = flag_value(flag, iter.next())?;
        match flag.as_str() {
            "--limit" => {
                query = query.limit(
                    value
                        .parse()
                        .with_context(|| format!("invalid limit: {value}"))?,
                );
            }
            "--direction" => query = query.direction(value.parse()?),
            "--status" => query = query.status(value.parse()?),
            other => bail!("unknown flag for payments: {other}"),
        }
    }
    Ok(Command::Payments(query))
}

fn parse_sell(rest: &[String]) -> Result<Command> {
    let [item_id, quantity] = rest else {
        bail!("sell needs ITEM_ID and QUANTITY");
    };
    let item_id =
        Uuid::parse_str(item_id).with_context(|| format!("invalid item id: {item_id}"))?;
    let quantity: i64 = quantity
        .parse()
        .with_context(|| format!("invalid quantity: {quantity}"))?;
    if quantity < 1 {
        bail!("quantity must be at least 1");
    }
    Ok(Command::Sell { item_id, quantity })
}

fn flag_value<'a>(flag: &str, value: Option<&'a String>) -> Result<&'a str> {
    value
        .map(String::as_str)
        .ok_or_else(|| anyhow!("{flag} needs a value"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cashflow_core::{Direction, PaymentStatus};
    use rstest::rstest;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_no_args_is_overview() {
        assert_eq!(parse(&[]).unwrap(), Command::Overview);
    }

    #[test]
    fn test_summary_dates() {
        assert_eq!(
            parse(&args(&["summary", "2025-01-01"])).unwrap(),
            Command::Summary {
                start: NaiveDate::from_ymd_opt(2025, 1, 1),
                end: None,
            }
        );
        assert!(parse(&args(&["summary", "01/01/2025"])).is_err());
    }

    #[test]
    fn test_payments_flags() {
        assert_eq!(
            parse(&args(&[
                "payments",
                "--direction",
                "inbound",
                "--limit",
                "100",
                "--status",
                "pending"
            ]))
            .unwrap(),
            Command::Payments(
                PaymentQuery::new()
                    .limit(100)
                    .direction(Direction::Inbound)
                    .status(PaymentStatus::Pending)
            )
        );
        assert_eq!(
            parse(&args(&["payments"])).unwrap(),
            Command::Payments(PaymentQuery::new())
        );
    }

    #[rstest]
    #[case(&["payments", "--direction"])]
    #[case(&["payments", "--direction", "sideways"])]
    #[case(&["payments", "--page", "2"])]
    #[case(&["regenerate", "many"])]
    #[case(&["inventory", "--sort", "name"])]
    #[case(&["sell", "not-a-uuid", "1"])]
    #[case(&["sell", "7b1e4a52-0c3d-4f9e-8a6b-2d5c9e1f3a70", "0"])]
    #[case(&["sell", "7b1e4a52-0c3d-4f9e-8a6b-2d5c9e1f3a70"])]
    #[case(&["ask", "   "])]
    #[case(&["launch"])]
    fn test_invalid_args(#[case] raw: &[&str]) {
        assert!(parse(&args(raw)).is_err());
    }

    #[test]
    fn test_sell() {
        assert_eq!(
            parse(&args(&["sell", "7b1e4a52-0c3d-4f9e-8a6b-2d5c9e1f3a70", "3"])).unwrap(),
            Command::Sell {
                item_id: Uuid::parse_str("7b1e4a52-0c3d-4f9e-8a6b-2d5c9e1f3a70").unwrap(),
                quantity: 3,
            }
        );
    }

    #[test]
    fn test_ask_joins_words() {
        assert_eq!(
            parse(&args(&["ask", "How", "is", "net", "cash?"])).unwrap(),
            Command::Ask {
                question: "How is net cash?".to_string(),
            }
        );
    }

    #[test]
    fn test_inventory_category() {
        assert_eq!(
            parse(&args(&["inventory", "--category", "Paddles"])).unwrap(),
            Command::Inventory {
                category: Some("Paddles".to_string()),
            }
        );
    }
}
