use doc_intake::intake::{FieldStatusSnapshot, RejectionRecord};
use doc_intake::{ServiceCatalog, ServiceDefinition};

const SECRET_MASK: &str = "********";

pub(crate) fn render_services(catalog: &ServiceCatalog) -> String {
    let mut lines = vec!["Serviços disponíveis".to_string()];
    for option in catalog.options() {
        lines.push(format!("- {}: {}", option.value, option.label));
    }
    finish(lines)
}

pub(crate) fn render_fields(service: &ServiceDefinition) -> String {
    let mut lines = vec![format!("{} ({})", service.name, service.id)];
    if !service.notice.is_empty() {
        lines.push(format!("Aviso: {}", service.notice));
    }

    lines.push("\nDocumentos".to_string());
    for field in &service.fields {
        let multiple = if field.multiple { " [vários arquivos]" } else { "" };
        lines.push(format!("- {}: {}{}", field.id, field.label, multiple));
    }

    if !service.extra_fields.is_empty() {
        lines.push("\nCampos adicionais".to_string());
        for extra in &service.extra_fields {
            let mut line = format!("- {}: {}", extra.id, extra.label);
            if !extra.placeholder.is_empty() {
                line.push_str(&format!(" (ex.: {})", extra.placeholder));
            }
            lines.push(line);
        }
    }
    finish(lines)
}

/// One line per field in catalog order, the way the backend summarizes a submission.
pub(crate) fn render_field_status(
    service: &ServiceDefinition,
    snapshot: &FieldStatusSnapshot,
) -> String {
    let mut lines = Vec::new();
    for field in &service.fields {
        let count = snapshot
            .get(&field.id)
            .map(|status| status.uploaded_count)
            .unwrap_or_default();
        let state = if count > 0 {
            "Documento anexado"
        } else {
            "Sem envio"
        };
        lines.push(format!("- {}: {} (Qtd: {})", field.label, state, count));
    }

    for extra in &service.extra_fields {
        let value = snapshot
            .get(&extra.id)
            .and_then(|status| status.value.as_deref())
            .unwrap_or_default();
        let shown = match (value.is_empty(), extra.kind.is_secret()) {
            (true, _) => "(não informado)",
            (false, true) => SECRET_MASK,
            (false, false) => value,
        };
        lines.push(format!("- {}: {}", extra.label, shown));
    }
    finish(lines)
}

pub(crate) fn render_rejections(records: &[RejectionRecord]) -> String {
    let mut lines = vec!["Arquivos rejeitados".to_string()];
    for record in records {
        let field = record.field_label.as_deref().unwrap_or(&record.field_id);
        lines.push(format!("- {} [{}]: {}", record.filename, field, record.reason));
    }
    finish(lines)
}

fn finish(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
