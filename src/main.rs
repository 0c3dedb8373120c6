use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result, miette};
use payform::application::checkout::CheckoutFlow;
use payform::domain::assembler::FormAssembler;
use payform::domain::method::PaymentMethod;
use payform::domain::outcome::ResponseOutcome;
use payform::domain::payload::{InquiryRequest, RefundRequest, RefundType};
use payform::domain::ports::{PaymentGatewayBox, UiPresenterBox};
use payform::infrastructure::console::ConsolePresenter;
use payform::infrastructure::http::HttpGateway;
use payform::error::CheckoutError;
use payform::interfaces::json::FieldFileReader;
use rust_decimal::Decimal;
use std::fs::File;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use url::Url;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the checkout backend
    #[arg(long, default_value = "http://localhost:5000")]
    base_url: Url,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Submit a payment with the selected method
    Pay {
        /// Payment method key (credit_card, qr_payment, rabbit_line_pay,
        /// installment, internet_banking)
        #[arg(long)]
        method: String,

        /// JSON file with the form field values
        #[arg(long)]
        fields: PathBuf,

        /// Print the resolved endpoint and payload without submitting
        #[arg(long)]
        dry_run: bool,
    },
    /// Look up the status of a submitted payment
    Inquire {
        #[arg(long)]
        merchant_id: String,

        #[arg(long)]
        order_id: String,
    },
    /// Void or refund a completed payment
    Refund {
        #[arg(long)]
        merchant_id: String,

        #[arg(long)]
        order_id: String,

        /// "void" or "refund"; a refund requires --amount
        #[arg(long)]
        refund_type: String,

        #[arg(long)]
        amount: Option<Decimal>,

        #[arg(long)]
        description: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let flow = {
        let assembler = FormAssembler::new(cli.base_url.clone());
        let gateway: PaymentGatewayBox =
            Box::new(HttpGateway::new(cli.base_url.clone()).into_diagnostic()?);
        let presenter: UiPresenterBox = Box::new(ConsolePresenter::new());
        CheckoutFlow::new(assembler, gateway, presenter)
    };

    match cli.command {
        Command::Pay {
            method,
            fields,
            dry_run,
        } => {
            let method: PaymentMethod = method.parse().into_diagnostic()?;
            let file = File::open(fields).into_diagnostic()?;
            let snapshot = FieldFileReader::new(file).read_fields().into_diagnostic()?;

            if dry_run {
                let assembler = FormAssembler::new(cli.base_url.clone());
                let payload = assembler.assemble(method, &snapshot).into_diagnostic()?;
                println!("POST {}", method.endpoint());
                println!(
                    "{}",
                    serde_json::to_string_pretty(&payload).into_diagnostic()?
                );
                return Ok(());
            }

            let outcome = flow.submit(method, &snapshot).await.into_diagnostic()?;
            ensure_success(outcome)?;
        }
        Command::Inquire {
            merchant_id,
            order_id,
        } => {
            let outcome = flow
                .inquire(InquiryRequest {
                    merchant_id,
                    order_id,
                })
                .await
                .into_diagnostic()?;
            ensure_success(outcome)?;
        }
        Command::Refund {
            merchant_id,
            order_id,
            refund_type,
            amount,
            description,
        } => {
            let refund_type = match refund_type.to_lowercase().as_str() {
                "void" => RefundType::Void,
                "refund" => RefundType::Refund,
                other => return Err(miette!("Unknown refund type: {other}")),
            };
            let outcome = flow
                .refund(RefundRequest {
                    merchant_id,
                    order_id,
                    refund_type,
                    amount,
                    description,
                })
                .await
                .into_diagnostic()?;
            ensure_success(outcome)?;
        }
    }

    Ok(())
}

/// Maps a failure outcome to a non-zero exit. The presenter has already
/// rendered the message; this only sets the process status.
fn ensure_success(outcome: ResponseOutcome) -> Result<()> {
    match outcome {
        ResponseOutcome::Failure { code, message } => Err(CheckoutError::Server {
            code: code.unwrap_or_else(|| "UNKNOWN".to_string()),
            message,
        })
        .into_diagnostic(),
        _ => Ok(()),
    }
}
