use clap::Subcommand;
use showroom::dto::CreateInquiryDto;

use crate::client::ShowroomClient;
use crate::output::{self, OutputConfig};

/// Inquiry commands
#[derive(Subcommand, Debug)]
pub enum InquiryCommands {
    /// Submit a visitor inquiry
    Submit {
        /// Name of the person inquiring
        #[clap(long)]
        name: String,
        /// Reply address
        #[clap(long)]
        email: String,
        /// Contact phone number
        #[clap(long)]
        phone: Option<String>,
        /// Company or organization
        #[clap(long)]
        company: Option<String>,
        /// Slug of the project the inquiry refers to
        #[clap(long)]
        project_slug: Option<String>,
        /// The inquiry text
        #[clap(long)]
        message: String,
    },
}

/// Executes an inquiry command
pub async fn execute(
    client: &ShowroomClient,
    cmd: InquiryCommands,
    config: &OutputConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        InquiryCommands::Submit {
            name,
            email,
            phone,
            company,
            project_slug,
            message,
        } => {
            let dto = CreateInquiryDto {
                name: Some(name),
                email: Some(email),
                phone,
                company,
                project_slug,
                message: Some(message),
            };
            let receipt = client.create_inquiry(&dto).await?;
            if receipt.success {
                output::print_success("Inquiry submitted.", config);
            }
        }
    }
    Ok(())
}
