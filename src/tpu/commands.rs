//! gcloud command lines for TPU lifecycle operations.
//!
//! The builder only produces text. Executing it is the workflow runner's
//! job, and printing it verbatim lets the operator copy it.

use crate::config::TpuConfig;

use super::model::Tpu;

/// Builds delete/create/reimage commands for a node.
#[derive(Debug, Clone)]
pub struct CommandBuilder {
    gcloud: String,
    project: Option<String>,
}

enum Flag<'a> {
    Value(&'a str, String),
    Switch(&'a str, bool),
}

impl CommandBuilder {
    /// Create a builder for the given gcloud binary and optional project.
    pub fn new(gcloud: impl Into<String>, project: Option<String>) -> Self {
        Self {
            gcloud: gcloud.into(),
            project,
        }
    }

    /// Create a builder from configuration.
    pub fn from_config(config: &TpuConfig) -> Self {
        Self::new(config.gcloud.clone(), config.project.clone())
    }

    /// Delete the node, in `zone` or its own zone.
    pub fn delete(&self, tpu: &Tpu, zone: Option<&str>) -> String {
        self.command_line(
            "delete",
            &tpu.id,
            vec![
                Flag::Value("zone", zone.unwrap_or(&tpu.zone).to_string()),
                Flag::Switch("quiet", true),
            ],
        )
    }

    /// Recreate the node with its current shape, optionally on a new version.
    pub fn create(&self, tpu: &Tpu, zone: Option<&str>, version: Option<&str>) -> String {
        let mut flags = vec![
            Flag::Value("zone", zone.unwrap_or(&tpu.zone).to_string()),
            Flag::Value("network", tpu.network.clone()),
            Flag::Value("range", tpu.cidr_block.clone()),
            Flag::Value("version", version.unwrap_or(&tpu.version).to_string()),
            Flag::Value("accelerator-type", tpu.accelerator_type.clone()),
            Flag::Switch("preemptible", tpu.preemptible),
        ];
        if let Some(description) = &tpu.description {
            flags.push(Flag::Value("description", description.clone()));
        }
        self.command_line("create", &tpu.id, flags)
    }

    /// Reimage the node in place, optionally on a new version.
    pub fn reimage(&self, tpu: &Tpu, version: Option<&str>) -> String {
        self.command_line(
            "reimage",
            &tpu.id,
            vec![
                Flag::Value("zone", tpu.zone.clone()),
                Flag::Value("version", version.unwrap_or(&tpu.version).to_string()),
                Flag::Switch("quiet", true),
            ],
        )
    }

    fn command_line(&self, verb: &str, id: &str, flags: Vec<Flag<'_>>) -> String {
        let mut args = vec![
            self.gcloud.clone(),
            "compute".to_string(),
            "tpus".to_string(),
            verb.to_string(),
            id.to_string(),
        ];

        if let Some(project) = &self.project {
            args.push("--project".to_string());
            args.push(project.clone());
        }

        for flag in flags {
            match flag {
                // Empty values are omitted so gcloud applies its defaults.
                Flag::Value(_, value) if value.is_empty() => {}
                Flag::Value(name, value) => {
                    args.push(format!("--{}", name));
                    args.push(value);
                }
                Flag::Switch(name, true) => args.push(format!("--{}", name)),
                Flag::Switch(_, false) => {}
            }
        }

        shell_words::join(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tpu::model::fixtures::node;
    use serde_json::json;

    fn tpu() -> Tpu {
        Tpu::from_json(node("tpu-euw4a-3", "europe-west4-a", "PREEMPTED", None)).unwrap()
    }

    #[test]
    fn delete_command() {
        let builder = CommandBuilder::new("gcloud", None);
        insta::assert_snapshot!(
            builder.delete(&tpu(), None),
            @"gcloud compute tpus delete tpu-euw4a-3 --zone europe-west4-a --quiet"
        );
    }

    #[test]
    fn delete_command_zone_override() {
        let builder = CommandBuilder::new("gcloud", None);
        let cmd = builder.delete(&tpu(), Some("us-central1-f"));
        assert!(cmd.contains("--zone us-central1-f"));
    }

    #[test]
    fn create_command_reuses_node_shape() {
        let builder = CommandBuilder::new("gcloud", None);
        insta::assert_snapshot!(
            builder.create(&tpu(), None, None),
            @"gcloud compute tpus create tpu-euw4a-3 --zone europe-west4-a --network default --range 10.48.0.0/29 --version 2.3 --accelerator-type v3-8 --preemptible"
        );
    }

    #[test]
    fn create_command_version_override() {
        let builder = CommandBuilder::new("gcloud", None);
        let cmd = builder.create(&tpu(), None, Some("nightly"));
        assert!(cmd.contains("--version nightly"));
        assert!(!cmd.contains("--version 2.3"));
    }

    #[test]
    fn create_command_quotes_description() {
        let mut raw = node("t", "us-central1-f", "READY", Some("HEALTHY"));
        raw["description"] = json!("team run #4");
        raw["schedulingConfig"] = json!({});
        let tpu = Tpu::from_json(raw).unwrap();

        let cmd = CommandBuilder::new("gcloud", None).create(&tpu, None, None);
        assert!(cmd.contains("--description 'team run #4'"));
        assert!(!cmd.contains("--preemptible"));
    }

    #[test]
    fn reimage_command() {
        let builder = CommandBuilder::new("gcloud", Some("research".into()));
        insta::assert_snapshot!(
            builder.reimage(&tpu(), Some("2.4")),
            @"gcloud compute tpus reimage tpu-euw4a-3 --project research --zone europe-west4-a --version 2.4 --quiet"
        );
    }
}
