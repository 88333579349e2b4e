use strum::EnumVariantNames;

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Step {
    Form,
    Chat,
}

impl Step {
    pub fn parse(name: &str) -> Option<Step> {
        match name {
            "form" => return Some(Step::Form),
            "chat" => return Some(Step::Chat),
            _ => return None,
        }
    }
}
