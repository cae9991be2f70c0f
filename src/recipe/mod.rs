//! The recipe record: storage format, persistence, and display.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::constants::{self, RECIPE_FILE_EXTENSION, REQUIRED_FIELDS};
use crate::error::{Error, Result};
use crate::ioutils;
use crate::prompt::Console;

mod editor;

/// The fixed tag categories a recipe can be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagCategory {
    Meal,
    Genre,
    Complexity,
    Course,
}

impl TagCategory {
    pub const ALL: [TagCategory; 4] = [
        TagCategory::Meal,
        TagCategory::Genre,
        TagCategory::Complexity,
        TagCategory::Course,
    ];

    /// The category key used in menus and in the stored document.
    pub fn as_str(&self) -> &'static str {
        match self {
            TagCategory::Meal => "meal",
            TagCategory::Genre => "genre",
            TagCategory::Complexity => "complexity",
            TagCategory::Course => "course",
        }
    }

    /// The fixed set of values this category may take.
    pub fn vocabulary(&self) -> &'static [&'static str] {
        match self {
            TagCategory::Meal => constants::tags::MEAL,
            TagCategory::Genre => constants::tags::GENRE,
            TagCategory::Complexity => constants::tags::COMPLEXITY,
            TagCategory::Course => constants::tags::COURSE,
        }
    }
}

/// A single recipe and the directory it persists to.
///
/// Field order matches the on-disk document: `name`, `description`,
/// `tags`, `ingredients`, `steps`. `recipe_dir` is configuration and is
/// never serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub tags: IndexMap<String, String>,
    pub ingredients: IndexMap<String, String>,
    pub steps: Vec<String>,
    #[serde(skip)]
    pub recipe_dir: PathBuf,
}

/// Derives the on-disk file name for a recipe name: lowercased, whitespace
/// runs collapsed to underscores.
pub fn file_name_for(name: &str) -> String {
    let slug = name.to_lowercase().split_whitespace().collect::<Vec<_>>().join("_");
    format!("{slug}.{RECIPE_FILE_EXTENSION}")
}

impl Recipe {
    /// Loads a recipe by name from `recipe_dir`.
    ///
    /// Fails if the file is missing, is not valid JSON, or lacks any of
    /// the required fields. `tags` and `description` default to unset.
    pub fn load(name: &str, recipe_dir: &Path) -> Result<Self> {
        let path = recipe_dir.join(file_name_for(name));
        log::debug!("Loading recipe from {}", path.display());
        let raw = ioutils::read_file(&path)?;
        let document: serde_json::Value = serde_json::from_str(&raw)?;
        for field in REQUIRED_FIELDS {
            if document.get(field).is_none() {
                return Err(Error::MissingFieldError { field: (*field).to_string() });
            }
        }
        // Deserialize from the raw text, not the checked Value: streaming
        // into the IndexMap fields keeps the document's key order.
        let mut recipe: Recipe = serde_json::from_str(&raw)?;
        recipe.recipe_dir = recipe_dir.to_path_buf();
        Ok(recipe)
    }

    /// The file name this recipe saves to, stable across repeated saves.
    pub fn file_name(&self) -> String {
        file_name_for(&self.name)
    }

    /// Serializes the recipe to `<recipe_dir>/<file name>`, overwriting any
    /// existing file of that name.
    pub fn save(&self) -> Result<PathBuf> {
        let path = self.recipe_dir.join(self.file_name());
        let document = serde_json::to_string(self)?;
        ioutils::write_file(&document, &path)?;
        log::debug!("Saved recipe '{}' to {}", self.name, path.display());
        Ok(path)
    }

    /// Writes the full recipe to the console.
    pub fn display<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<()> {
        console.labeled("Recipe Name: ", &self.name)?;
        if let Some(description) = &self.description {
            console.line(description)?;
        }
        console.line("")?;
        self.display_ingredients(console)?;
        self.display_steps(console)?;
        self.display_tags(console)?;
        Ok(())
    }

    pub(crate) fn display_ingredients<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<()> {
        console.labeled("Ingredient List: ", "")?;
        for (ingredient, quantity) in &self.ingredients {
            console.line(&format!("\t{quantity} {ingredient}"))?;
        }
        console.line("")?;
        Ok(())
    }

    pub(crate) fn display_steps<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<()> {
        console.labeled("Steps: ", "")?;
        for (number, step) in self.steps.iter().enumerate() {
            console.line(&format!("\t{}) {step}", number + 1))?;
        }
        console.line("")?;
        Ok(())
    }

    fn display_tags<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<()> {
        if self.tags.is_empty() {
            return Ok(());
        }
        console.labeled("Tags: ", "")?;
        for (category, value) in &self.tags {
            console.line(&format!("\t{category}: {value}"))?;
        }
        console.line("")?;
        Ok(())
    }
}
