//! Record implementations for the public record types
//!
//! Each table lists every field of the shape under its wire name. Timestamps
//! are exposed as unix milliseconds and log levels as numeric severity so
//! both order chronologically and by importance.

use super::fields::FieldSpec;
use super::traits::Record;
use super::values::FieldValue;
use decorum_model::{AccessToken, Application, LogEntry, RecordKind, Setting, SettingValue};

static APPLICATION_FIELDS: [FieldSpec<Application>; 6] = [
    FieldSpec {
        name: "id",
        extract: |app| FieldValue::owned_text(app.id.to_string()),
    },
    FieldSpec {
        name: "name",
        extract: |app| FieldValue::text(&app.name),
    },
    FieldSpec {
        name: "organization_id",
        extract: |app| FieldValue::owned_text(app.organization_id.to_string()),
    },
    FieldSpec {
        name: "version",
        extract: |app| FieldValue::text(&app.version),
    },
    FieldSpec {
        name: "created_at",
        extract: |app| FieldValue::Integer(app.created_at.timestamp_millis()),
    },
    FieldSpec {
        name: "replicas",
        extract: |app| FieldValue::Integer(app.replicas),
    },
];

static LOG_ENTRY_FIELDS: [FieldSpec<LogEntry>; 5] = [
    FieldSpec {
        name: "timestamp",
        extract: |entry| FieldValue::Integer(entry.timestamp),
    },
    FieldSpec {
        name: "level",
        extract: |entry| FieldValue::Integer(entry.level.severity()),
    },
    FieldSpec {
        name: "message",
        extract: |entry| FieldValue::text(&entry.message),
    },
    FieldSpec {
        name: "source",
        extract: |entry| FieldValue::text(&entry.source),
    },
    FieldSpec {
        name: "sequence",
        extract: |entry| FieldValue::Integer(entry.sequence),
    },
];

static SETTING_FIELDS: [FieldSpec<Setting>; 4] = [
    FieldSpec {
        name: "key",
        extract: |setting| FieldValue::text(&setting.key),
    },
    FieldSpec {
        name: "value",
        extract: |setting| match &setting.value {
            SettingValue::Integer(value) => FieldValue::Integer(*value),
            SettingValue::Text(value) => FieldValue::text(value),
            SettingValue::Flag(value) => FieldValue::Boolean(*value),
        },
    },
    FieldSpec {
        name: "scope",
        extract: |setting| FieldValue::text(&setting.scope),
    },
    FieldSpec {
        name: "updated_at",
        extract: |setting| FieldValue::Integer(setting.updated_at.timestamp_millis()),
    },
];

static ACCESS_TOKEN_FIELDS: [FieldSpec<AccessToken>; 4] = [
    FieldSpec {
        name: "id",
        extract: |token| FieldValue::owned_text(token.id.to_string()),
    },
    FieldSpec {
        name: "name",
        extract: |token| FieldValue::text(&token.name),
    },
    FieldSpec {
        name: "issued_at",
        extract: |token| FieldValue::Integer(token.issued_at.timestamp_millis()),
    },
    FieldSpec {
        name: "expires_at",
        extract: |token| FieldValue::from(token.expires_at.map(|at| at.timestamp_millis())),
    },
];

impl Record for Application {
    const KIND: RecordKind = RecordKind::Application;

    fn field_table() -> &'static [FieldSpec<Self>] {
        &APPLICATION_FIELDS
    }
}

impl Record for LogEntry {
    const KIND: RecordKind = RecordKind::LogEntry;

    fn field_table() -> &'static [FieldSpec<Self>] {
        &LOG_ENTRY_FIELDS
    }
}

impl Record for Setting {
    const KIND: RecordKind = RecordKind::Setting;

    fn field_table() -> &'static [FieldSpec<Self>] {
        &SETTING_FIELDS
    }
}

impl Record for AccessToken {
    const KIND: RecordKind = RecordKind::AccessToken;

    fn field_table() -> &'static [FieldSpec<Self>] {
        &ACCESS_TOKEN_FIELDS
    }
}

fn names<R: Record>() -> Vec<&'static str> {
    R::field_table().iter().map(|spec| spec.name).collect()
}

/// Every field name the record shape of `kind` exposes.
pub fn field_names(kind: RecordKind) -> Vec<&'static str> {
    match kind {
        RecordKind::Application => names::<Application>(),
        RecordKind::LogEntry => names::<LogEntry>(),
        RecordKind::Setting => names::<Setting>(),
        RecordKind::AccessToken => names::<AccessToken>(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn field_names_are_unique_per_kind() {
        for kind in RecordKind::ALL {
            let names = field_names(kind);
            let unique: HashSet<_> = names.iter().collect();
            assert_eq!(unique.len(), names.len(), "duplicate field on {kind}");
        }
    }

    #[test]
    fn organization_id_is_readable_but_separate_from_orderability() {
        assert!(field_names(RecordKind::Application).contains(&"organization_id"));
    }
}
