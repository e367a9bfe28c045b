use serde::{Deserialize, Serialize};
use tracing::warn;

/// Name of the tier that upstream data historically promoted without setting
/// `destaque`.
pub const LEGACY_HIGHLIGHT_NAME: &str = "Profissional";

/// A subscription tier offered to a studio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub id: String,
    pub name: String,
    pub description: String,
    /// BRL per month
    pub monthly_price: f64,
    /// Display order is top-to-bottom
    pub features: Vec<String>,
    /// `None` when upstream omitted the field; no label is shown
    pub project_limit: Option<Limit>,
    /// `None` when upstream omitted the field; no label is shown
    pub testimonial_limit: Option<Limit>,
    pub highlighted: bool,
}

/// A usage cap as sent by the plans API.
///
/// Upstream distinguishes "field omitted" from "explicitly null" (unbounded),
/// so the wire value is kept as-is and only interpreted by the views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Limit {
    Capped(u32),
    Unbounded,
}

/// Plan as it appears in the `/api/planos` response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRecord {
    pub id: String,
    pub nome: String,
    #[serde(default)]
    pub descricao: String,
    pub preco: f64,
    #[serde(default)]
    pub recursos: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_limit")]
    pub limite_projetos: Option<Limit>,
    #[serde(default, deserialize_with = "deserialize_limit")]
    pub limite_depoimentos: Option<Limit>,
    #[serde(default)]
    pub destaque: Option<bool>,
}

/// Top-level `/api/planos` body
///
/// Records stay untyped here so one malformed entry cannot sink the others.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlansEnvelope {
    #[serde(default)]
    pub planos: Option<Vec<serde_json::Value>>,
}

// Present-but-null means unbounded; absence is handled by `#[serde(default)]`.
fn deserialize_limit<'de, D>(deserializer: D) -> Result<Option<Limit>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<u32> = Option::deserialize(deserializer)?;
    Ok(Some(value.map_or(Limit::Unbounded, Limit::Capped)))
}

impl From<PlanRecord> for Plan {
    fn from(record: PlanRecord) -> Self {
        let highlighted = record
            .destaque
            .unwrap_or(record.nome == LEGACY_HIGHLIGHT_NAME);

        Plan {
            id: record.id,
            name: record.nome,
            description: record.descricao,
            monthly_price: record.preco.max(0.0),
            features: record.recursos,
            project_limit: record.limite_projetos,
            testimonial_limit: record.limite_depoimentos,
            highlighted,
        }
    }
}

/// Convert upstream records to plans, keeping upstream order.
///
/// Records that do not match [`PlanRecord`] are skipped with a warning.
/// Only the first highlighted plan keeps its flag.
pub fn plans_from_records(records: Vec<serde_json::Value>) -> Vec<Plan> {
    let mut plans: Vec<Plan> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value::<PlanRecord>(value) {
            Ok(record) => Some(Plan::from(record)),
            Err(e) => {
                warn!(reason = "record", index, error = %e, "Skipping malformed plan record");
                None
            }
        })
        .collect();
    enforce_single_highlight(&mut plans);
    plans
}

pub fn enforce_single_highlight(plans: &mut [Plan]) {
    let mut seen = false;
    for plan in plans.iter_mut() {
        if plan.highlighted {
            if seen {
                plan.highlighted = false;
            }
            seen = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> PlansEnvelope {
        serde_json::from_str(json).unwrap()
    }

    fn records(json: &str) -> Vec<PlanRecord> {
        parse(json)
            .planos
            .unwrap()
            .into_iter()
            .map(|value| serde_json::from_value(value).unwrap())
            .collect()
    }

    #[test]
    fn test_full_record_deserializes() {
        let parsed = records(
            r#"{"planos":[{"id":"pro","nome":"Pro","descricao":"d","preco":49.9,
                "recursos":["A","B"],"limiteProjetos":null,"limiteDepoimentos":20,"destaque":true}]}"#,
        );
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].limite_projetos, Some(Limit::Unbounded));
        assert_eq!(parsed[0].limite_depoimentos, Some(Limit::Capped(20)));
        assert_eq!(parsed[0].destaque, Some(true));
    }

    #[test]
    fn test_missing_optional_fields() {
        let plan = Plan::from(records(r#"{"planos":[{"id":"x","nome":"X","preco":0}]}"#).remove(0));
        assert!(plan.features.is_empty());
        assert_eq!(plan.project_limit, None);
        assert_eq!(plan.testimonial_limit, None);
        assert!(!plan.highlighted);
    }

    #[test]
    fn test_missing_planos_field() {
        assert!(parse("{}").planos.is_none());
        assert!(parse(r#"{"planos":null}"#).planos.is_none());
    }

    #[test]
    fn test_legacy_name_highlight_when_flag_absent() {
        let plan = Plan::from(
            records(r#"{"planos":[{"id":"pro","nome":"Profissional","preco":49.9}]}"#).remove(0),
        );
        assert!(plan.highlighted);
    }

    #[test]
    fn test_explicit_flag_beats_name() {
        let plan = Plan::from(
            records(r#"{"planos":[{"id":"pro","nome":"Profissional","preco":49.9,"destaque":false}]}"#)
                .remove(0),
        );
        assert!(!plan.highlighted);
    }

    #[test]
    fn test_only_first_highlight_survives() {
        let envelope = parse(
            r#"{"planos":[
                {"id":"a","nome":"A","preco":1,"destaque":false},
                {"id":"b","nome":"B","preco":2,"destaque":true},
                {"id":"c","nome":"Profissional","preco":3}
            ]}"#,
        );
        let plans = plans_from_records(envelope.planos.unwrap());
        let flags: Vec<bool> = plans.iter().map(|p| p.highlighted).collect();
        assert_eq!(flags, vec![false, true, false]);
    }

    #[test]
    fn test_malformed_record_is_skipped_others_kept() {
        let envelope = parse(
            r#"{"planos":[
                {"id":"solo","nome":"Solo","preco":19.9},
                {"id":"max","nome":"Max","preco":99,"limiteProjetos":-1},
                {"id":7,"nome":"Sete","preco":1},
                {"id":"cheap","nome":"Cheap","preco":"10"},
                {"id":"studio","nome":"Estúdio","preco":129.9}
            ]}"#,
        );
        let plans = plans_from_records(envelope.planos.unwrap());
        let ids: Vec<&str> = plans.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["solo", "studio"]);
    }
}
