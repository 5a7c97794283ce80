use crate::cli::parse_assignment;
use crate::render::{render_field_status, render_fields, render_rejections, render_services};
use clap::Args;
use doc_intake::config::AppConfig;
use doc_intake::error::AppError;
use doc_intake::intake::{
    AttachedFile, IntakeSession, RejectionRecord, SessionError, SubmissionReport,
};
use doc_intake::{telemetry, HttpValidatorClient, ServiceCatalog};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Args, Debug)]
pub(crate) struct SubmitArgs {
    /// Service identifier to submit under
    #[arg(long)]
    pub(crate) service: String,
    /// Client full name
    #[arg(long)]
    pub(crate) name: String,
    /// Client phone number with area code
    #[arg(long)]
    pub(crate) phone: String,
    /// Attach a file to a document field, repeatable
    #[arg(long = "attach", value_name = "FIELD=PATH", value_parser = parse_assignment)]
    pub(crate) attachments: Vec<(String, String)>,
    /// Fill an extra text field, repeatable
    #[arg(long = "extra", value_name = "FIELD=VALUE", value_parser = parse_assignment)]
    pub(crate) extras: Vec<(String, String)>,
    /// Override the configured validator endpoint
    #[arg(long)]
    pub(crate) api_url: Option<String>,
    /// Write rejected files to this CSV when the validator refuses any
    #[arg(long)]
    pub(crate) rejections_csv: Option<PathBuf>,
}

pub(crate) fn run_services(catalog_path: Option<PathBuf>) -> Result<(), AppError> {
    let (_, catalog) = bootstrap(catalog_path)?;
    print!("{}", render_services(&catalog));
    Ok(())
}

pub(crate) fn run_fields(catalog_path: Option<PathBuf>, service_id: &str) -> Result<(), AppError> {
    let (_, catalog) = bootstrap(catalog_path)?;
    let service = catalog
        .get(service_id)
        .ok_or_else(|| SessionError::UnknownService(service_id.to_string()))?;
    print!("{}", render_fields(service));
    Ok(())
}

pub(crate) async fn run_submit(
    catalog_path: Option<PathBuf>,
    args: SubmitArgs,
) -> Result<(), AppError> {
    let SubmitArgs {
        service,
        name,
        phone,
        attachments,
        extras,
        api_url,
        rejections_csv,
    } = args;

    let (mut config, catalog) = bootstrap(catalog_path)?;
    if let Some(api_url) = api_url {
        config.validator.api_url = api_url;
    }
    let endpoint = config.validator.endpoint()?;

    let mut session = IntakeSession::new(Arc::new(catalog));
    session.select_service(Some(&service))?;
    session.set_name(name);
    session.set_phone(phone);

    for (field_id, value) in extras {
        session.set_extra_value(&field_id, value)?;
    }

    for (field_id, path) in attachments {
        let file = AttachedFile::from_path(&path).await?;
        let file_name = file.name().to_string();
        if session.attach_files(&field_id, vec![file])? == 0 {
            warn!(field_id = %field_id, file = %file_name, "duplicate attachment ignored");
        }
    }

    if let Some(active) = session.active_service() {
        println!("Serviço: {} ({})", active.name, active.id);
        print!("{}", render_field_status(active, &session.field_status()));
    }

    let client = HttpValidatorClient::new(endpoint);
    info!(endpoint = %client.endpoint(), "submitting documents");
    let report = session.submit(&client).await?;

    println!("\n{report}");
    match &report {
        SubmissionReport::Accepted { folder } => {
            println!("Pasta: {folder}");
            Ok(())
        }
        SubmissionReport::PartiallyAccepted { folder, .. } => {
            println!("Pasta: {folder}");
            let records = session.rejections().records();
            print!("{}", render_rejections(records));
            if let Some(path) = rejections_csv {
                write_rejections_csv(&path, records)?;
                println!("Rejeições exportadas para {}", path.display());
            }
            Err(AppError::Incomplete(report.to_string()))
        }
        SubmissionReport::Failed { message } => Err(AppError::Incomplete(message.clone())),
    }
}

fn bootstrap(catalog_path: Option<PathBuf>) -> Result<(AppConfig, ServiceCatalog), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    let catalog = load_catalog(catalog_path.or_else(|| config.catalog_path.clone()))?;
    Ok((config, catalog))
}

fn load_catalog(path: Option<PathBuf>) -> Result<ServiceCatalog, AppError> {
    match path {
        Some(path) => {
            let reader = BufReader::new(File::open(&path)?);
            let catalog = ServiceCatalog::from_json_reader(reader)?;
            info!(path = %path.display(), services = catalog.services().len(), "catalog loaded");
            Ok(catalog)
        }
        None => Ok(ServiceCatalog::standard()),
    }
}

pub(crate) fn write_rejections_csv(path: &Path, records: &[RejectionRecord]) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_path(path).map_err(std::io::Error::from)?;
    writer
        .write_record(["field_id", "field_label", "filename", "reason"])
        .map_err(std::io::Error::from)?;
    for record in records {
        writer
            .write_record([
                record.field_id.as_str(),
                record.field_label.as_deref().unwrap_or_default(),
                record.filename.as_str(),
                record.reason.as_str(),
            ])
            .map_err(std::io::Error::from)?;
    }
    writer.flush()?;
    Ok(())
}
