//! Governance definition properties.
//!
//! Governance definitions form a two-level family: drivers and policies sit
//! directly under the definition, while controls share an implementation
//! description and refine further into rules, metrics, security groups and
//! so on.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Properties of a governance definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GovernanceDefinitionProperties {
    /// Unique document identifier, stored as the qualified name
    pub document_identifier: String,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub scope: Option<String>,
    pub domain_identifier: i64,
    pub importance: Option<String>,
    #[serde(default)]
    pub implications: Vec<String>,
    #[serde(default)]
    pub outcomes: Vec<String>,
    #[serde(default)]
    pub results: Vec<String>,
    #[serde(default)]
    pub additional_properties: BTreeMap<String, String>,
    #[serde(default)]
    pub extended_properties: BTreeMap<String, Value>,
    pub kind: GovernanceDefinitionKind,
}

/// Concrete governance definition variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "definitionKind", rename_all = "camelCase")]
pub enum GovernanceDefinitionKind {
    Generic,
    Strategy {
        #[serde(default)]
        business_imperatives: Vec<String>,
    },
    Regulation {
        source: Option<String>,
        #[serde(default)]
        regulators: Vec<String>,
    },
    Principle,
    Obligation,
    Approach,
    Control(GovernanceControl),
}

/// Fields shared by every governance control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GovernanceControl {
    pub implementation_description: Option<String>,
    pub kind: GovernanceControlKind,
}

/// Concrete governance control variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "controlKind", rename_all = "camelCase")]
pub enum GovernanceControlKind {
    Generic,
    Rule,
    Process,
    Responsibility,
    Procedure,
    Metric {
        measurement: Option<String>,
        target: Option<String>,
    },
    SecurityGroup {
        distinguished_name: Option<String>,
    },
    NamingStandardRule {
        #[serde(default)]
        name_patterns: Vec<String>,
    },
}

impl GovernanceControl {
    pub fn new(kind: GovernanceControlKind) -> Self {
        Self {
            implementation_description: None,
            kind,
        }
    }

    pub fn with_implementation_description(mut self, description: impl Into<String>) -> Self {
        self.implementation_description = Some(description.into());
        self
    }
}

impl GovernanceDefinitionProperties {
    pub fn new(document_identifier: impl Into<String>, kind: GovernanceDefinitionKind) -> Self {
        Self {
            document_identifier: document_identifier.into(),
            title: None,
            summary: None,
            description: None,
            scope: None,
            domain_identifier: 0,
            importance: None,
            implications: Vec::new(),
            outcomes: Vec::new(),
            results: Vec::new(),
            additional_properties: BTreeMap::new(),
            extended_properties: BTreeMap::new(),
            kind,
        }
    }

    /// Governance control of the given control kind.
    pub fn control(document_identifier: impl Into<String>, control: GovernanceControl) -> Self {
        Self::new(document_identifier, GovernanceDefinitionKind::Control(control))
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    pub fn with_domain_identifier(mut self, domain_identifier: i64) -> Self {
        self.domain_identifier = domain_identifier;
        self
    }

    pub fn with_importance(mut self, importance: impl Into<String>) -> Self {
        self.importance = Some(importance.into());
        self
    }

    pub fn with_implications(mut self, implications: Vec<String>) -> Self {
        self.implications = implications;
        self
    }

    pub fn with_outcomes(mut self, outcomes: Vec<String>) -> Self {
        self.outcomes = outcomes;
        self
    }

    pub fn with_results(mut self, results: Vec<String>) -> Self {
        self.results = results;
        self
    }

    pub fn with_additional_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.additional_properties.insert(name.into(), value.into());
        self
    }

    pub fn with_extended_property(mut self, name: impl Into<String>, value: Value) -> Self {
        self.extended_properties.insert(name.into(), value);
        self
    }

    pub fn is_control(&self) -> bool {
        matches!(self.kind, GovernanceDefinitionKind::Control(_))
    }
}
