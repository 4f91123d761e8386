//! Prompt templates: built-ins embedded at compile time, optionally
//! shadowed by files in an override directory.

use crate::error::{Error, Result};
use std::borrow::Cow;
use std::path::PathBuf;

/// Built-in resume-generation prompt. Carries a `{{userDescription}}`
/// placeholder and instructs the model to answer with a ```json fence.
pub const RESUME_PROMPT: &str = include_str!("../prompts/resume_prompt.txt");

/// Name under which [`RESUME_PROMPT`] is registered.
pub const RESUME_PROMPT_NAME: &str = "resume_prompt.txt";

/// Read-only source of prompt templates.
#[derive(Debug, Clone, Default)]
pub struct PromptStore {
    override_dir: Option<PathBuf>,
}

impl PromptStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shadow built-in templates with files from `dir`. Missing files fall
    /// back to the built-ins.
    pub fn with_override_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.override_dir = Some(dir.into());
        self
    }

    /// Raw text of the named template.
    pub fn get(&self, name: &str) -> Result<Cow<'static, str>> {
        if let Some(dir) = &self.override_dir {
            let path = dir.join(name);
            if path.is_file() {
                return Ok(Cow::Owned(std::fs::read_to_string(path)?));
            }
        }
        match name {
            RESUME_PROMPT_NAME => Ok(Cow::Borrowed(RESUME_PROMPT)),
            _ => Err(Error::TemplateNotFound(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_resume_prompt_has_placeholder() {
        let store = PromptStore::new();
        let text = store.get(RESUME_PROMPT_NAME).unwrap();
        assert!(text.contains("{{userDescription}}"));
        assert!(text.contains("```json"));
    }

    #[test]
    fn test_unknown_template_is_an_error() {
        let store = PromptStore::new();
        assert!(matches!(
            store.get("nope.txt"),
            Err(Error::TemplateNotFound(_))
        ));
    }

    #[test]
    fn test_override_dir_shadows_builtin() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(RESUME_PROMPT_NAME), "custom {{userDescription}}").unwrap();
        let store = PromptStore::new().with_override_dir(dir.path());
        assert_eq!(
            store.get(RESUME_PROMPT_NAME).unwrap(),
            "custom {{userDescription}}"
        );
    }

    #[test]
    fn test_override_dir_falls_back_when_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = PromptStore::new().with_override_dir(dir.path());
        assert_eq!(store.get(RESUME_PROMPT_NAME).unwrap(), RESUME_PROMPT);
    }
}
