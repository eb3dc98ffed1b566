//! Results renderer
//!
//! Keeps the retained output of the last submission: a persistent legend
//! followed by either one table per record or a single error paragraph.
//! The window draws it with iced widgets, `to_html` serializes it.

use serde_json::Value;

use crate::backend::types::ResultRecord;
use crate::error::LookupError;
use crate::form::Group;

pub const LEGEND: &str = "Results";

const STAR_UNITS: &[(&str, &str)] = &[
    ("mass", "Suns (approximately 2×10^30 kg)"),
    ("radius", "Suns (approximately 696,000 km)"),
    ("temperature", "Kelvin"),
    ("distance_light_year", "light years"),
];

const PLANET_UNITS: &[(&str, &str)] = &[
    ("mass", "Jupiter masses"),
    ("radius", "Jupiter radii"),
    ("period", "Earth days"),
    ("temperature", "Kelvin"),
    ("distance_light_year", "light years"),
    ("semi_major_axis", "AU"),
    ("host_star_mass", "Solar masses"),
    ("host_star_temperature", "Kelvin"),
];

/// Unit appended to a field's value, if the field has one.
pub fn unit_for(group: Group, field: &str) -> Option<&'static str> {
    let table = match group {
        Group::Stars => STAR_UNITS,
        Group::Planets => PLANET_UNITS,
    };
    table
        .iter()
        .find(|(key, _)| *key == field)
        .map(|(_, unit)| *unit)
}

/// `semi_major_axis` -> `semi major axis`
pub fn humanize(field: &str) -> String {
    field.replace('_', " ")
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "unknown".to_string(),
        other => other.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultTable {
    pub title: String,
    pub rows: Vec<Row>,
}

impl ResultTable {
    pub fn from_record(group: Group, record: &ResultRecord) -> Self {
        let rows = record
            .fields
            .iter()
            .map(|(key, value)| {
                let unit = unit_for(group, key).filter(|_| !value.is_null());
                let value = format_value(value);
                Row {
                    label: humanize(key),
                    value: match unit {
                        Some(unit) => format!("{} {}", value, unit),
                        None => value,
                    },
                }
            })
            .collect();

        Self {
            title: record.name.clone(),
            rows,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Table(ResultTable),
    Error(String),
}

/// Rendered output area. The legend is never cleared.
#[derive(Debug, Clone)]
pub struct ResultsPanel {
    legend: String,
    blocks: Vec<Block>,
}

impl Default for ResultsPanel {
    fn default() -> Self {
        Self::new(LEGEND)
    }
}

impl ResultsPanel {
    pub fn new(legend: impl Into<String>) -> Self {
        Self {
            legend: legend.into(),
            blocks: Vec::new(),
        }
    }

    pub fn legend(&self) -> &str {
        &self.legend
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Drop everything but the legend.
    pub fn clear(&mut self) {
        self.blocks.clear();
    }

    pub fn render_records(&mut self, group: Group, records: &[ResultRecord]) {
        self.clear();
        self.blocks.extend(
            records
                .iter()
                .map(|record| Block::Table(ResultTable::from_record(group, record))),
        );
        tracing::info!("Rendered {} {} table(s)", records.len(), group.label());
    }

    pub fn render_error(&mut self, error: &LookupError) {
        self.clear();
        self.blocks.push(Block::Error(error.to_string()));
    }

    /// Render the outcome of one lookup, whichever way it went.
    pub fn render_outcome(&mut self, group: Group, outcome: &Result<Vec<ResultRecord>, LookupError>) {
        match outcome {
            Ok(records) => self.render_records(group, records),
            Err(err) => self.render_error(err),
        }
    }

    pub fn to_html(&self) -> String {
        let mut html = String::new();
        html.push_str(&format!("<legend>{}</legend>\n", escape_html(&self.legend)));

        for block in &self.blocks {
            match block {
                Block::Table(table) => {
                    html.push_str("<table>\n");
                    html.push_str(&format!(
                        "  <tr><th colspan=\"2\">{}</th></tr>\n",
                        escape_html(&table.title)
                    ));
                    for row in &table.rows {
                        html.push_str(&format!(
                            "  <tr><td>{}</td><td>{}</td></tr>\n",
                            escape_html(&row.label),
                            escape_html(&row.value)
                        ));
                    }
                    html.push_str("</table>\n");
                }
                Block::Error(message) => {
                    html.push_str(&format!("<p class=\"error\">{}</p>\n", escape_html(message)));
                }
            }
        }

        html
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::api::decode_response;
    use reqwest::StatusCode;

    fn records(json: &str) -> Vec<ResultRecord> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_sun_table() {
        let mut panel = ResultsPanel::default();
        panel.render_records(Group::Stars, &records(r#"[{"name":"Sun","mass":1}]"#));

        assert_eq!(
            panel.blocks(),
            [Block::Table(ResultTable {
                title: "Sun".to_string(),
                rows: vec![Row {
                    label: "mass".to_string(),
                    value: "1 Suns (approximately 2×10^30 kg)".to_string(),
                }],
            })]
        );
    }

    #[test]
    fn test_planet_labels_and_units() {
        let table = ResultTable::from_record(
            Group::Planets,
            &records(r#"[{"name":"Kepler-22b","semi_major_axis":0.849,"discovery":"2011","host_star_mass":null}]"#)[0],
        );

        let rows: Vec<(&str, &str)> = table
            .rows
            .iter()
            .map(|r| (r.label.as_str(), r.value.as_str()))
            .collect();
        assert_eq!(
            rows,
            [
                ("semi major axis", "0.849 AU"),
                ("discovery", "2011"),
                ("host star mass", "unknown"),
            ]
        );
    }

    #[test]
    fn test_error_paragraph_from_404() {
        let mut panel = ResultsPanel::default();
        panel.render_records(Group::Stars, &records(r#"[{"name":"Sun"}]"#));

        let outcome = decode_response(StatusCode::NOT_FOUND, r#"{"error":"not found"}"#);
        panel.render_outcome(Group::Stars, &outcome);

        assert_eq!(panel.blocks(), [Block::Error("Error 404 not found".to_string())]);
        assert!(panel
            .to_html()
            .contains("<p class=\"error\">Error 404 not found</p>"));
    }

    #[test]
    fn test_second_render_replaces_first() {
        let mut panel = ResultsPanel::default();
        panel.render_records(
            Group::Planets,
            &records(r#"[{"name":"Mars","mass":0.00034},{"name":"Venus","mass":0.00256}]"#),
        );
        panel.render_records(Group::Stars, &records(r#"[{"name":"Vega"}]"#));

        assert_eq!(panel.legend(), LEGEND);
        assert_eq!(panel.blocks().len(), 1);
        match &panel.blocks()[0] {
            Block::Table(table) => assert_eq!(table.title, "Vega"),
            other => panic!("Expected table, got {:?}", other),
        }
    }

    #[test]
    fn test_html_is_escaped() {
        let mut panel = ResultsPanel::default();
        panel.render_records(Group::Stars, &records(r#"[{"name":"<b>Sun</b>","note":"a & b"}]"#));

        let html = panel.to_html();
        assert!(html.starts_with("<legend>Results</legend>\n"));
        assert!(html.contains("&lt;b&gt;Sun&lt;/b&gt;"));
        assert!(html.contains("<td>note</td><td>a &amp; b</td>"));
        assert_eq!(html.matches("<table>").count(), 1);
    }

    #[test]
    fn test_empty_result_list_leaves_only_legend() {
        let mut panel = ResultsPanel::default();
        panel.render_error(&LookupError::Transport("dns".to_string()));
        panel.render_records(Group::Planets, &[]);
        assert!(panel.blocks().is_empty());
        assert_eq!(panel.to_html(), "<legend>Results</legend>\n");
    }
}
