use crate::core::order::CartLine;
use crate::domain::model::{LineItem, ServiceType, ShippingRequest};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_negative, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "shipping-quote")]
#[command(about = "Estimate PAC/SEDEX shipping for a destination postal code")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Quote both services for a destination
    Quote {
        /// Destination postal code (CEP), with or without punctuation
        zip_code: String,

        /// Cart item as `weight:quantity` (either side may be empty), repeatable
        #[arg(short, long = "item", value_parser = parse_line_item)]
        items: Vec<LineItem>,

        /// Print the default quotes instead of failing on invalid input
        #[arg(long)]
        fallback: bool,
    },

    /// Checkout totals for a cart shipped with the chosen service
    Summary {
        /// Destination postal code (CEP)
        zip_code: String,

        /// Cart line as `name:price:quantity`, repeatable
        #[arg(short, long = "line", required = true)]
        lines: Vec<CartLine>,

        /// Item weight in kg applied to every unit of every line
        #[arg(long)]
        unit_weight: Option<f64>,

        /// PAC or SEDEX
        #[arg(long, default_value = "PAC")]
        service: ServiceType,

        /// Voucher discount in BRL
        #[arg(long, default_value = "0")]
        discount: f64,
    },
}

impl Command {
    /// The shipping request a command implies. Summary lines become line items
    /// carrying their quantity and `unit_weight`.
    pub fn shipping_request(&self) -> ShippingRequest {
        match self {
            Command::Quote {
                zip_code, items, ..
            } => ShippingRequest::new(zip_code.clone(), items.clone()),
            Command::Summary {
                zip_code,
                lines,
                unit_weight,
                ..
            } => ShippingRequest::new(
                zip_code.clone(),
                lines
                    .iter()
                    .map(|line| LineItem {
                        weight: *unit_weight,
                        quantity: Some(line.quantity),
                    })
                    .collect(),
            ),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Command::Summary {
            discount,
            unit_weight,
            ..
        } = &self.command
        {
            validate_non_negative("discount", *discount)?;
            if let Some(weight) = unit_weight {
                validate_non_negative("unit_weight", *weight)?;
            }
        }
        Ok(())
    }
}

fn parse_line_item(s: &str) -> std::result::Result<LineItem, String> {
    let (weight, quantity) = s.split_once(':').unwrap_or((s, ""));

    let weight = match weight.trim() {
        "" => None,
        w => Some(w.parse::<f64>().map_err(|e| format!("invalid weight '{}': {}", w, e))?),
    };
    let quantity = match quantity.trim() {
        "" => None,
        q => Some(q.parse::<u32>().map_err(|e| format!("invalid quantity '{}': {}", q, e))?),
    };

    Ok(LineItem { weight, quantity })
}
