use crate::configuration::Config;
use crate::configuration::ConfigKey;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Author {
    User,
    Assistant,
}

impl ToString for Author {
    fn to_string(&self) -> String {
        match self {
            Author::User => {
                let username = Config::get(ConfigKey::Username);
                if username.is_empty() {
                    return String::from("Sie");
                }
                return username;
            }
            Author::Assistant => {
                let model = Config::get(ConfigKey::Model);
                if model.is_empty() {
                    return String::from("Agent");
                }
                return model;
            }
        }
    }
}
