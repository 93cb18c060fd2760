//! Text and JSON output for each subcommand.
//!
//! Text output never ends in a newline; the caller adds one.

use std::fmt;

use anyhow::Result;
use serde::Serialize;

use forte_config::OutputFormat;
use forte_core::{Classification, Classifier};
use forte_store::ClassificationStore;
use forte_types::{
    Cardinality, ClassKey, IntervalClassVector, InvarianceVector, InversionSign, PitchClassSet,
};

const LABEL_WIDTH: usize = 13;

fn push_field(out: &mut String, label: &str, value: impl fmt::Display) {
    out.push_str(&format!("\n{label:<LABEL_WIDTH$} {value}"));
}

fn to_json(value: &impl Serialize) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[derive(Serialize)]
struct ClassificationView<'a> {
    forte_name: String,
    #[serde(flatten)]
    classification: &'a Classification,
    names: &'a [String],
}

#[derive(Serialize)]
struct RecordView<'a> {
    forte_name: String,
    key: ClassKey,
    pitch_classes: PitchClassSet,
    interval_class_vector: IntervalClassVector,
    invariance_vector: InvarianceVector,
    z_partner: Option<String>,
    tn_index: Option<u8>,
    names: &'a [String],
}

#[derive(Serialize)]
struct MembersView<'a> {
    cardinality: Cardinality,
    name: &'static str,
    tn_classes: usize,
    tni_classes: usize,
    members: Vec<RecordView<'a>>,
}

#[derive(Serialize)]
struct ZMateView<'a> {
    origin: RecordView<'a>,
    partner: Option<RecordView<'a>>,
}

#[derive(Serialize)]
struct CheckView {
    classes: usize,
    records: usize,
    findings: Vec<String>,
}

pub(crate) struct Renderer<'a> {
    classifier: Classifier<'a>,
    format: OutputFormat,
    show_names: bool,
}

impl<'a> Renderer<'a> {
    pub(crate) const fn new(classifier: Classifier<'a>, format: OutputFormat, show_names: bool) -> Self {
        Self {
            classifier,
            format,
            show_names,
        }
    }

    fn push_names(&self, out: &mut String, names: &[String]) {
        if self.show_names && !names.is_empty() {
            push_field(out, "names", names.join(", "));
        }
    }

    fn record_view(&self, key: ClassKey) -> Result<RecordView<'a>> {
        let record = self.classifier.lookup(key)?;
        let z_partner = self
            .classifier
            .z_relation(key)?
            .map(|(partner, _)| self.classifier.forte_name(partner))
            .transpose()?;
        Ok(RecordView {
            forte_name: self.classifier.forte_name(key)?,
            key,
            pitch_classes: self.classifier.transposed_normal_form(key)?,
            interval_class_vector: record.interval_class_vector(),
            invariance_vector: record.invariance_vector(),
            z_partner,
            tn_index: self.classifier.tn_index(key).ok(),
            names: self.classifier.names(key)?,
        })
    }

    pub(crate) fn classification(&self, classification: &Classification) -> Result<String> {
        let view = ClassificationView {
            forte_name: self.classifier.forte_name(classification.key)?,
            classification,
            names: self.classifier.names(classification.key)?,
        };
        if self.format == OutputFormat::Json {
            return to_json(&view);
        }

        let mut out = format!("{}  {}", view.forte_name, classification.pitch_classes);
        push_field(&mut out, "mode", classification.mode);
        push_field(&mut out, "prime form", classification.prime_form);
        push_field(&mut out, "operation", classification.operation);
        push_field(
            &mut out,
            "icv",
            classification.structure.interval_class_vector(),
        );
        self.push_names(&mut out, view.names);
        Ok(out)
    }

    pub(crate) fn record(&self, key: ClassKey) -> Result<String> {
        let view = self.record_view(key)?;
        if self.format == OutputFormat::Json {
            return to_json(&view);
        }

        let mut out = view.forte_name.clone();
        push_field(&mut out, "pitch classes", view.pitch_classes);
        push_field(&mut out, "icv", view.interval_class_vector);
        push_field(&mut out, "invariance", view.invariance_vector);
        push_field(&mut out, "z-partner", view.z_partner.as_deref().unwrap_or("none"));
        if let Some(tn_index) = view.tn_index {
            push_field(&mut out, "tn index", tn_index);
        }
        self.push_names(&mut out, view.names);
        Ok(out)
    }

    pub(crate) fn members(&self, cardinality: Cardinality) -> Result<String> {
        let members = self
            .classifier
            .members(cardinality)
            .map(|(key, _)| self.record_view(key))
            .collect::<Result<Vec<_>>>()?;
        // Counted rather than read from the bound tables, which hold a
        // placeholder bound for the empty cardinality.
        let tni_classes = members
            .iter()
            .filter(|member| member.key.sign != InversionSign::Negative)
            .count();
        let view = MembersView {
            cardinality,
            name: cardinality.name(),
            tn_classes: members.len(),
            tni_classes,
            members,
        };
        if self.format == OutputFormat::Json {
            return to_json(&view);
        }

        let mut out = format!(
            "{}: {} TN classes, {} TnI classes",
            view.name,
            view.tn_classes,
            view.tni_classes
        );
        for member in &view.members {
            let mut line = format!(
                "{:<8} {:<14} {}",
                member.forte_name,
                member.pitch_classes.to_string(),
                member.interval_class_vector
            );
            if self.show_names && !member.names.is_empty() {
                line.push_str(&format!("  {}", member.names.join(", ")));
            }
            out.push('\n');
            out.push_str(&line);
        }
        Ok(out)
    }

    pub(crate) fn z_mate(&self, key: ClassKey) -> Result<String> {
        let origin = self.record_view(key)?;
        let partner = self
            .classifier
            .z_relation(key)?
            .map(|(partner, _)| self.record_view(partner))
            .transpose()?;
        let view = ZMateView { origin, partner };
        if self.format == OutputFormat::Json {
            return to_json(&view);
        }

        let origin = &view.origin;
        let Some(partner) = &view.partner else {
            return Ok(format!("{} has no Z-partner", origin.forte_name));
        };
        let mut out = format!("{}  {}", origin.forte_name, origin.pitch_classes);
        out.push_str(&format!("\n{}  {}", partner.forte_name, partner.pitch_classes));
        push_field(&mut out, "shared icv", origin.interval_class_vector);
        Ok(out)
    }

    pub(crate) fn check(&self, store: &ClassificationStore) -> Result<String> {
        let view = CheckView {
            classes: store.class_count(),
            records: store.len(),
            findings: store.warnings().iter().map(ToString::to_string).collect(),
        };
        if self.format == OutputFormat::Json {
            return to_json(&view);
        }

        let mut out = format!(
            "{} classes, {} records, {} findings",
            view.classes,
            view.records,
            view.findings.len()
        );
        for finding in &view.findings {
            out.push_str(&format!("\n  {finding}"));
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use forte_config::OutputFormat;
    use forte_core::Classifier;
    use forte_store::ClassificationStore;
    use forte_tables::{BundledDataset, InMemoryDataset};
    use forte_types::{Cardinality, EquivalenceMode, ForteClass, ForteIndex, PitchClassSet};
    use insta::assert_snapshot;

    use super::Renderer;

    fn text(show_names: bool) -> Renderer<'static> {
        Renderer::new(Classifier::global(), OutputFormat::Text, show_names)
    }

    #[test]
    fn classification_text() {
        let result = Classifier::global()
            .classify(PitchClassSet::literal(&[2, 6, 9]), EquivalenceMode::Tni)
            .unwrap();
        assert_snapshot!(text(true).classification(&result).unwrap(), @r"
        3-11B  {2,6,9}
        mode          tni
        prime form    {0,3,7}
        operation     T9I
        icv           <001110>
        names         major triad
        ");
    }

    #[test]
    fn record_text_with_z_partner() {
        let key = "4-Z15A".parse().unwrap();
        assert_snapshot!(text(true).record(key).unwrap(), @r"
        4-Z15A
        pitch classes {0,1,4,6}
        icv           <111111>
        invariance    [1,0,0,0,0,3,3,1]
        z-partner     4-Z29A
        tn index      22
        names         all-interval tetrachord
        ");
    }

    #[test]
    fn members_text_without_names() {
        let diads = Cardinality::new(2).unwrap();
        assert_snapshot!(text(false).members(diads).unwrap(), @r"
        diad: 6 TN classes, 6 TnI classes
        2-1      {0,1}          <100000>
        2-2      {0,2}          <010000>
        2-3      {0,3}          <001000>
        2-4      {0,4}          <000100>
        2-5      {0,5}          <000010>
        2-6      {0,6}          <000001>
        ");
    }

    #[test]
    fn members_of_empty_cardinality_lists_nothing() {
        let none = Cardinality::new(0).unwrap();
        assert_eq!(
            text(true).members(none).unwrap(),
            "none: 0 TN classes, 0 TnI classes"
        );
        let trichords = Cardinality::new(3).unwrap();
        let header = text(true).members(trichords).unwrap();
        assert!(header.starts_with("trichord: 19 TN classes, 12 TnI classes\n"));
    }

    #[test]
    fn z_mate_text() {
        let renderer = text(true);
        assert_snapshot!(renderer.z_mate("4-15B".parse().unwrap()).unwrap(), @r"
        4-Z15B  {0,2,5,6}
        4-Z29A  {0,1,3,7}
        shared icv    <111111>
        ");
        assert_eq!(
            renderer.z_mate("3-11B".parse().unwrap()).unwrap(),
            "3-11B has no Z-partner"
        );
    }

    #[test]
    fn classification_json_carries_operation() {
        let result = Classifier::global()
            .classify(PitchClassSet::literal(&[2, 6, 9]), EquivalenceMode::Tn)
            .unwrap();
        let renderer = Renderer::new(Classifier::global(), OutputFormat::Json, true);
        let json: serde_json::Value =
            serde_json::from_str(&renderer.classification(&result).unwrap()).unwrap();
        assert_eq!(json["forte_name"], "3-11B");
        assert_eq!(json["mode"], "tn");
        assert_eq!(json["prime_form"], serde_json::json!([0, 4, 7]));
        assert_eq!(json["operation"]["transposition"], 2);
        assert_eq!(json["operation"]["inverted"], false);
        assert_eq!(json["names"], serde_json::json!(["major triad"]));
    }

    #[test]
    fn check_lists_findings() {
        let mut dataset = InMemoryDataset::from_dataset(&BundledDataset);
        let class = ForteClass::new(Cardinality::new(3).unwrap(), ForteIndex::new(11).unwrap());
        dataset.set_inversion_default(class, None);
        let store = ClassificationStore::build(&dataset);
        assert_snapshot!(text(true).check(&store).unwrap(), @r"
        223 classes, 351 records, 1 findings
          3-11 has a distinct inversion but no recorded inverted set; using an empty placeholder
        ");
    }
}
