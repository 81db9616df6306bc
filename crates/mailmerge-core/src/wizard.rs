//! The four-stage mail merge workflow.
//!
//! `UploadData -> SelectTemplate -> MapFields -> Generate`. Each transition
//! checks the current stage, so a template cannot be loaded before records and
//! generation cannot start before the mapping stage. Starting generation freezes
//! the mapping into the returned [`Generator`].

use std::fmt;

use tracing::{debug, info};

use mailmerge_map::MappingState;
use mailmerge_model::RecordSet;

use crate::error::WizardError;
use crate::generate::{GenerationContext, Generator};
use crate::placeholders::extract_placeholders;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    UploadData,
    SelectTemplate,
    MapFields,
    Generate,
}

impl WizardStep {
    /// 1-based position shown to users.
    pub fn number(self) -> usize {
        match self {
            Self::UploadData => 1,
            Self::SelectTemplate => 2,
            Self::MapFields => 3,
            Self::Generate => 4,
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::UploadData => "upload data",
            Self::SelectTemplate => "select template",
            Self::MapFields => "map fields",
            Self::Generate => "generate",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Default)]
pub struct Wizard {
    step: WizardStep,
    records: Option<RecordSet>,
    template: Option<String>,
    mapping: Option<MappingState>,
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn records(&self) -> Option<&RecordSet> {
        self.records.as_ref()
    }

    pub fn template(&self) -> Option<&str> {
        self.template.as_deref()
    }

    pub fn mapping(&self) -> Option<&MappingState> {
        self.mapping.as_ref()
    }

    fn expect_step(&self, expected: WizardStep, action: &'static str) -> Result<(), WizardError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(WizardError::WrongStep {
                action,
                current: self.step,
            })
        }
    }

    /// Accept the ingested table and move on to template selection.
    pub fn load_records(&mut self, records: RecordSet) -> Result<(), WizardError> {
        self.expect_step(WizardStep::UploadData, "load records")?;
        info!(
            records = records.len(),
            columns = records.columns.len(),
            "records loaded"
        );
        self.records = Some(records);
        self.step = WizardStep::SelectTemplate;
        Ok(())
    }

    /// Accept the template text, extract its placeholders and move on to mapping.
    ///
    /// The mapping starts empty; call [`Wizard::auto_map`] for suggestions.
    pub fn load_template(&mut self, template: impl Into<String>) -> Result<(), WizardError> {
        self.expect_step(WizardStep::SelectTemplate, "load a template")?;
        let Some(records) = self.records.as_ref() else {
            return Err(WizardError::WrongStep {
                action: "load a template",
                current: self.step,
            });
        };
        let template = template.into();
        let placeholders = extract_placeholders(&template);
        debug!(placeholders = placeholders.len(), "template loaded");
        self.mapping = Some(MappingState::new(placeholders, records.columns.clone()));
        self.template = Some(template);
        self.step = WizardStep::MapFields;
        Ok(())
    }

    /// Apply the case-insensitive auto-mapping. Returns the number of matches.
    pub fn auto_map(&mut self) -> Result<usize, WizardError> {
        let state = self.mapping_mut()?;
        let matched = state.apply_suggestions();
        debug!(matched, "auto-mapping applied");
        Ok(matched)
    }

    /// Mapping under edit. Only available during the mapping stage.
    pub fn mapping_mut(&mut self) -> Result<&mut MappingState, WizardError> {
        let current = self.step;
        match (current, self.mapping.as_mut()) {
            (WizardStep::MapFields, Some(state)) => Ok(state),
            _ => Err(WizardError::WrongStep {
                action: "edit the mapping",
                current,
            }),
        }
    }

    /// Freeze the mapping and hand back a generator for the run.
    ///
    /// The wizard stays in the mapping stage when the generator rejects its
    /// inputs, so the mapping can be fixed and generation retried.
    pub fn start_generation(&mut self, context: GenerationContext) -> Result<Generator, WizardError> {
        self.expect_step(WizardStep::MapFields, "start generation")?;
        let (Some(template), Some(state)) = (self.template.as_ref(), self.mapping.as_ref()) else {
            return Err(WizardError::WrongStep {
                action: "start generation",
                current: self.step,
            });
        };
        let generator = Generator::new(template.clone(), state.freeze(), context)?;
        self.step = WizardStep::Generate;
        Ok(generator)
    }

    /// Step back one stage, discarding what that stage produced.
    pub fn back(&mut self) {
        self.step = match self.step {
            WizardStep::UploadData => WizardStep::UploadData,
            WizardStep::SelectTemplate => {
                self.records = None;
                WizardStep::UploadData
            }
            WizardStep::MapFields => {
                self.template = None;
                self.mapping = None;
                WizardStep::SelectTemplate
            }
            WizardStep::Generate => WizardStep::MapFields,
        };
    }

    /// Drop everything and return to the first stage.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use mailmerge_model::{ColumnSet, Placeholder, Record};

    use super::*;
    use crate::error::GenerationError;

    fn records() -> RecordSet {
        RecordSet::new(
            ColumnSet::new(vec!["Name".to_string(), "Course".to_string()]),
            vec![Record::from_pairs([("Name", "Alice"), ("Course", "Rust")])],
        )
    }

    fn context() -> GenerationContext {
        GenerationContext::new(
            NaiveDate::from_ymd_opt(2026, 10, 17)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        )
    }

    #[test]
    fn stages_cannot_be_skipped() {
        let mut wizard = Wizard::new();
        let err = wizard.load_template("{{name}}").unwrap_err();
        assert_eq!(err.to_string(), "cannot load a template during the upload data step");
        assert!(wizard.mapping_mut().is_err());
        assert!(wizard.start_generation(context()).is_err());
    }

    #[test]
    fn full_walkthrough() {
        let mut wizard = Wizard::new();
        wizard.load_records(records()).unwrap();
        assert_eq!(wizard.step(), WizardStep::SelectTemplate);

        wizard.load_template("{{name}} takes {{course}} on {{date}}").unwrap();
        assert_eq!(wizard.step(), WizardStep::MapFields);
        assert_eq!(wizard.auto_map().unwrap(), 2);
        assert!(wizard.mapping().unwrap().is_complete());

        let generator = wizard.start_generation(context()).unwrap();
        assert_eq!(wizard.step(), WizardStep::Generate);
        let record = &wizard.records().unwrap().records[0];
        assert_eq!(generator.render_text(record), "Alice takes Rust on 10/17/2026");
    }

    #[test]
    fn incomplete_mapping_keeps_mapping_stage() {
        let mut wizard = Wizard::new();
        wizard.load_records(records()).unwrap();
        wizard.load_template("{{name}} {{grade}}").unwrap();
        wizard.auto_map().unwrap();

        let err = wizard.start_generation(context()).unwrap_err();
        assert!(matches!(
            err,
            WizardError::Generation(GenerationError::IncompleteMapping { .. })
        ));
        assert_eq!(wizard.step(), WizardStep::MapFields);

        let grade = Placeholder::new("{{grade}}").unwrap();
        wizard.mapping_mut().unwrap().assign(&grade, "Course").unwrap();
        assert!(wizard.start_generation(context()).is_ok());
    }

    #[test]
    fn mapping_is_frozen_once_generation_starts() {
        let mut wizard = Wizard::new();
        wizard.load_records(records()).unwrap();
        wizard.load_template("{{name}}").unwrap();
        wizard.auto_map().unwrap();
        let generator = wizard.start_generation(context()).unwrap();

        assert!(wizard.mapping_mut().is_err());
        assert_eq!(generator.mapping().len(), 1);
    }

    #[test]
    fn back_discards_later_stages() {
        let mut wizard = Wizard::new();
        wizard.load_records(records()).unwrap();
        wizard.load_template("{{name}}").unwrap();
        wizard.back();
        assert_eq!(wizard.step(), WizardStep::SelectTemplate);
        assert!(wizard.template().is_none());
        wizard.back();
        assert!(wizard.records().is_none());

        wizard.load_records(records()).unwrap();
        wizard.reset();
        assert_eq!(wizard.step(), WizardStep::UploadData);
        assert_eq!(WizardStep::MapFields.number(), 3);
    }
}
