/// One optional demo of the deployment.
///
/// Region-bound demos carry the Cognitive Services kind used for the
/// capacity check and the key their chosen region is persisted under.
#[derive(Debug, Clone, Copy)]
pub struct Demo {
    /// Key stem for the persisted flag and resource-group values.
    pub stem: &'static str,
    /// Short name used in resource-group names.
    pub slug: &'static str,
    /// Human-readable name used in prompts.
    pub display: &'static str,
    pub kind: Option<&'static str>,
    pub location_key: Option<&'static str>,
}

/// All demos, in the order they are offered.
pub const DEMOS: &[Demo] = &[
    Demo {
        stem: "INTRO",
        slug: "intro",
        display: "Intro",
        kind: None,
        location_key: None,
    },
    Demo {
        stem: "VISION",
        slug: "vision",
        display: "Computer Vision",
        kind: Some("ComputerVision"),
        location_key: Some("VISION_LOCATION"),
    },
    Demo {
        stem: "LANGUAGE",
        slug: "language",
        display: "Language",
        kind: None,
        location_key: None,
    },
    Demo {
        stem: "OPENAI",
        slug: "openai",
        display: "Azure OpenAI",
        kind: Some("OpenAI"),
        location_key: Some("AOAI_LOCATION"),
    },
    Demo {
        stem: "SEARCH",
        slug: "search",
        display: "AI Search",
        kind: None,
        location_key: None,
    },
    Demo {
        stem: "DOCINTEL",
        slug: "docintel",
        display: "Document Intelligence",
        kind: Some("FormRecognizer"),
        location_key: Some("DOCINTEL_LOCATION"),
    },
];

impl Demo {
    pub fn flag_key(&self) -> String {
        format!("{}_DEMO", self.stem)
    }

    pub fn resource_group_key(&self) -> String {
        format!("{}_RESOURCE_GROUP", self.stem)
    }

    pub fn resource_group_name(&self, env_name: &str) -> String {
        format!("rg-{}-{}", self.slug, env_name)
    }
}
