use crate::db::rosters;
use crate::db::Database;
use crate::domain::classify::{classify_roster, summarize};
use crate::domain::mapping::FieldMapping;
use crate::domain::record::CrewMember;
use crate::errors::ServerError;
use crate::ingest;
use crate::report::narrative;
use crate::responses::{html_response, redirect_response, text_response, ResultResp};
use crate::spreadsheets::export_report_xlsx;
use crate::templates;
use crate::templates::pages::DashboardVm;
use astra::Request;
use chrono::Local;
use std::collections::HashMap;
use std::io::Read;

pub fn handle(mut req: Request, db: &Database) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(templates::pages::upload_page()),
        ("POST", "/roster") => upload_roster(&mut req, db),
        ("GET", "/mapping") => mapping_form(db),
        ("POST", "/mapping") => confirm_mapping(&mut req, db),
        ("GET", "/dashboard") => dashboard(db),
        ("GET", "/report.xlsx") => report_xlsx(db),
        ("GET", "/briefing") => briefing(db),
        _ => Err(ServerError::NotFound),
    }
}

fn read_body(req: &mut Request) -> Result<Vec<u8>, ServerError> {
    let mut buf = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("Failed to read request body: {e}")))?;
    Ok(buf)
}

fn parse_form(body: &[u8]) -> HashMap<String, String> {
    url::form_urlencoded::parse(body).into_owned().collect()
}

fn is_form_post(req: &Request) -> bool {
    req.headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("application/x-www-form-urlencoded"))
        .unwrap_or(false)
}

/// Accepts the ingestion collaborator's JSON rows, either as a raw JSON
/// body or in the upload form's `rows` field.
fn upload_roster(req: &mut Request, db: &Database) -> ResultResp {
    let from_form = is_form_post(req);
    let body = read_body(req)?;

    let dataset = if from_form {
        let form = parse_form(&body);
        let rows = form
            .get("rows")
            .ok_or_else(|| ServerError::BadRequest("Missing 'rows' form field".into()))?;
        ingest::dataset_from_json(rows.as_bytes())?
    } else {
        ingest::dataset_from_json(&body)?
    };

    rosters::insert_roster(db, &dataset)?;
    redirect_response("/mapping")
}

fn mapping_form(db: &Database) -> ResultResp {
    let Some(stored) = rosters::load_current(db)? else {
        return redirect_response("/");
    };

    // Pre-fill with the confirmed mapping if one exists, else auto-guess.
    let preset = stored
        .mapping
        .unwrap_or_else(|| FieldMapping::guess(&stored.dataset.columns));

    html_response(templates::pages::mapping_page(
        &stored.dataset.columns,
        &preset,
        stored.threshold_days,
    ))
}

fn confirm_mapping(req: &mut Request, db: &Database) -> ResultResp {
    let body = read_body(req)?;
    let form = parse_form(&body);

    let field = |name: &str| form.get(name).cloned().unwrap_or_default();
    let optional = |name: &str| Some(field(name)).filter(|v| !v.trim().is_empty());

    let mapping = FieldMapping {
        name: field("name"),
        expiration: field("expiration"),
        status: optional("status"),
        license: optional("license"),
    };

    let threshold_days: i64 = field("threshold")
        .trim()
        .parse()
        .map_err(|_| ServerError::BadRequest("Threshold must be a whole number of days".into()))?;
    if threshold_days <= 0 {
        return Err(ServerError::BadRequest(
            "Threshold must be a positive number of days".into(),
        ));
    }

    let stored = rosters::load_current(db)?
        .ok_or_else(|| ServerError::BadRequest("No roster has been uploaded".into()))?;
    mapping.validate_against(&stored.dataset.columns)?;

    rosters::save_mapping(db, stored.id, &mapping, threshold_days)?;
    redirect_response("/dashboard")
}

struct ClassifiedView {
    roster: Vec<CrewMember>,
    threshold_days: i64,
}

/// Recomputes the classification from the stored raw rows. Nothing
/// classified is ever persisted, so mapping or threshold changes simply
/// produce a fresh roster on the next request.
fn load_classified(db: &Database) -> Result<Option<ClassifiedView>, ServerError> {
    let Some(stored) = rosters::load_current(db)? else {
        return Ok(None);
    };
    let Some(mapping) = stored.mapping else {
        return Ok(None);
    };

    let today = Local::now().date_naive();
    let roster = classify_roster(&stored.dataset.rows, &mapping, stored.threshold_days, today)?;
    Ok(Some(ClassifiedView {
        roster,
        threshold_days: stored.threshold_days,
    }))
}

fn dashboard(db: &Database) -> ResultResp {
    let Some(view) = load_classified(db)? else {
        // Nothing to show yet; send the operator back to the start.
        return redirect_response("/");
    };

    let vm = DashboardVm {
        summary: summarize(&view.roster),
        threshold_days: view.threshold_days,
        roster: &view.roster,
    };
    html_response(templates::pages::dashboard_page(&vm))
}

fn report_xlsx(db: &Database) -> ResultResp {
    let view = load_classified(db)?.ok_or_else(|| {
        ServerError::MappingError("No classified roster available for export".into())
    })?;
    export_report_xlsx(&view.roster, Local::now().date_naive())
}

fn briefing(db: &Database) -> ResultResp {
    let view = load_classified(db)?.ok_or_else(|| {
        ServerError::MappingError("No classified roster available for briefing".into())
    })?;
    text_response(narrative::build_briefing(&view.roster, view.threshold_days)?)
}
