use schemars::schema_for;
use serde_json::Value;

use evx_core::entities::{Article, Author, ClinicalTrial, SystematicReview, Tag};
use evx_core::enums::EntityType;

use crate::cli::{GlobalFlags, SchemaArgs};
use crate::output::output;

pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let value = match &args.entity {
        Some(name) => entity_schema(name.parse::<EntityType>()?)?,
        None => {
            let mut all = serde_json::Map::new();
            for entity in EntityType::all() {
                all.insert(entity.as_str().to_string(), entity_schema(*entity)?);
            }
            Value::Object(all)
        }
    };

    output(&value, flags.format)
}

fn entity_schema(entity: EntityType) -> anyhow::Result<Value> {
    let schema = match entity {
        EntityType::Article => schema_for!(Article),
        EntityType::Author => schema_for!(Author),
        EntityType::Tag => schema_for!(Tag),
        EntityType::SystematicReview => schema_for!(SystematicReview),
        EntityType::ClinicalTrial => schema_for!(ClinicalTrial),
    };
    Ok(serde_json::to_value(schema)?)
}
