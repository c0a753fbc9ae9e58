use anyhow::{Context, Result, bail};
use decorum_core::decoration::field_names;
use decorum_core::prelude::*;
use std::io::{self, Read, Write};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

/// Engine from a config file, or the builtin tables when none is given.
pub fn build_engine(config: Option<&Path>) -> Result<DecorationEngine> {
    let Some(path) = config else {
        return Ok(DecorationEngine::default());
    };

    let config = DecorationConfig::load(path)
        .with_context(|| format!("loading config from {}", path.display()))?;
    let engine = DecorationEngine::from_config(config).context("building capability registry")?;
    info!(path = %path.display(), "using decoration config");
    Ok(engine)
}

/// Parse a sort key written as `field` or `field:asc|desc`.
pub fn parse_sort_key(raw: &str) -> Result<OrderingStrategy> {
    let (field, direction) = match raw.split_once(':') {
        Some((field, "asc" | "ascending")) => (field, SortDirection::Ascending),
        Some((field, "desc" | "descending")) => (field, SortDirection::Descending),
        Some((_, other)) => bail!("unknown sort direction '{other}' in '{raw}'"),
        None => (raw, SortDirection::Ascending),
    };

    if field.trim().is_empty() {
        bail!("sort key '{raw}' has an empty field name");
    }
    Ok(OrderingStrategy::new(field.trim(), direction))
}

pub fn build_request(
    order_by: Option<String>,
    desc: bool,
    then_by: &[String],
    offset: Option<usize>,
    limit: Option<usize>,
) -> Result<DecorationRequest> {
    let mut keys = Vec::with_capacity(1 + then_by.len());
    if let Some(field) = order_by {
        let direction = if desc {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        keys.push(OrderingStrategy::new(field, direction));
    }
    for raw in then_by {
        keys.push(parse_sort_key(raw)?);
    }

    Ok(DecorationRequest {
        order_by: keys,
        page: limit.map(|limit| Pagination::new(offset.unwrap_or(0), limit)),
    })
}

fn read_input(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("reading collection from stdin")?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("reading collection from {}", input.display()))
    }
}

pub fn decorate(
    engine: DecorationEngine,
    input: &Path,
    request: DecorationRequest,
    pretty: bool,
) -> Result<()> {
    let raw = read_input(input)?;
    let collection: Collection =
        serde_json::from_str(&raw).context("parsing collection document")?;
    debug!(kind = %collection.kind(), records = collection.len(), "read collection");

    let dispatcher = DecorationDispatcher::new(engine);
    let decorated = dispatcher
        .decorate_request(collection, request)
        .context("decorating collection")?;

    let mut stdout = io::stdout().lock();
    if pretty {
        serde_json::to_writer_pretty(&mut stdout, &decorated)?;
    } else {
        serde_json::to_writer(&mut stdout, &decorated)?;
    }
    writeln!(stdout)?;
    Ok(())
}

pub fn list_fields(engine: &DecorationEngine, kind: Option<&str>) -> Result<()> {
    let kinds = match kind {
        Some(name) => vec![RecordKind::from_str(name)?],
        None => RecordKind::ALL.to_vec(),
    };

    let registry = engine.registry();
    let mut stdout = io::stdout().lock();
    for kind in kinds {
        match registry.orderable_fields(kind) {
            None => writeln!(stdout, "{kind}: unsupported")?,
            Some(fields) if fields.is_empty() => writeln!(stdout, "{kind}: (none)")?,
            Some(fields) => {
                let known = field_names(kind);
                let rendered: Vec<String> = fields
                    .iter()
                    .map(|field| {
                        if known.iter().any(|name| *name == field.as_str()) {
                            field.clone()
                        } else {
                            format!("{field} (unresolvable)")
                        }
                    })
                    .collect();
                writeln!(stdout, "{kind}: {}", rendered.join(", "))?;
            }
        }
    }
    Ok(())
}
