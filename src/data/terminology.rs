//! The curated CodeSystem -> ValueSet flow dataset behind the diagram.
//!
//! Weights are relative contribution counts, not real-world statistics; the
//! point is the shape of the ecosystem, not precise numbers.

use crate::components::sankey::{FlowGraph, FlowLink, FlowNode, NodeKind};
use crate::theme;

fn code_system(id: &str, name: &str, description: &str, color: &str) -> FlowNode {
	FlowNode::new(id, name, NodeKind::Source)
		.with_description(description)
		.with_color(color)
}

fn value_set(id: &str, name: &str, description: &str) -> FlowNode {
	// value sets share one fill, resolved by the layout
	FlowNode::new(id, name, NodeKind::Target).with_description(description)
}

/// Build the flow graph shown on the diagram page.
pub fn flow_graph() -> FlowGraph {
	let nodes = vec![
		code_system(
			"snomed",
			"SNOMED CT",
			"Clinical terminology for healthcare",
			theme::system::SNOMED,
		),
		code_system(
			"loinc",
			"LOINC",
			"Laboratory and clinical observations",
			theme::system::LOINC,
		),
		code_system("icd10cm", "ICD-10-CM", "Diagnosis codes", theme::system::ICD10CM),
		code_system("rxnorm", "RxNorm", "Medication codes", theme::system::RXNORM),
		code_system("cpt", "CPT", "Procedure codes", theme::system::CPT),
		code_system("ucum", "UCUM", "Units of measure", theme::system::UCUM),
		code_system("hl7v3", "HL7 v3", "Administrative codes", theme::system::HL7V3),
		value_set("clinical-findings", "Clinical Findings", "Signs, symptoms, and conditions"),
		value_set("lab-tests", "Laboratory Tests", "Lab test panels and individual tests"),
		value_set("medications", "Medications", "Pharmaceutical products"),
		value_set("procedures", "Procedures", "Medical procedures and interventions"),
		value_set("diagnoses", "Diagnoses", "Disease classifications"),
		value_set("vital-signs", "Vital Signs", "Patient vital measurements"),
		value_set("allergies", "Allergies", "Allergen and intolerance codes"),
		value_set("body-sites", "Body Sites", "Anatomical locations"),
		value_set("admin-data", "Administrative", "Patient demographics and admin"),
	];

	let links = vec![
		FlowLink::new("snomed", "clinical-findings", 25.0),
		FlowLink::new("snomed", "procedures", 20.0),
		FlowLink::new("snomed", "allergies", 15.0),
		FlowLink::new("snomed", "body-sites", 18.0),
		FlowLink::new("snomed", "medications", 8.0),
		FlowLink::new("loinc", "lab-tests", 30.0),
		FlowLink::new("loinc", "vital-signs", 20.0),
		FlowLink::new("loinc", "clinical-findings", 10.0),
		FlowLink::new("icd10cm", "diagnoses", 35.0),
		FlowLink::new("icd10cm", "clinical-findings", 12.0),
		FlowLink::new("rxnorm", "medications", 40.0),
		FlowLink::new("rxnorm", "allergies", 8.0),
		FlowLink::new("cpt", "procedures", 30.0),
		FlowLink::new("cpt", "lab-tests", 15.0),
		FlowLink::new("ucum", "vital-signs", 15.0),
		FlowLink::new("ucum", "lab-tests", 20.0),
		FlowLink::new("hl7v3", "admin-data", 25.0),
		FlowLink::new("hl7v3", "clinical-findings", 8.0),
	];

	FlowGraph::new(nodes, links)
}
