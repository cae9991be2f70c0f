//! Interactive construction and review of a recipe.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use indexmap::IndexMap;

use crate::error::Result;
use crate::prompt::Console;

use super::{Recipe, TagCategory};

const ADD_INGREDIENTS: &str = "Add Ingredients";
const ADD_STEPS: &str = "Add Steps";
const NO_CHANGE: &str = "No Change";

impl Recipe {
    /// Walks the user through creating a recipe from scratch.
    ///
    /// Fields are filled in order (name, ingredients, steps, optional
    /// description, tags), then the review loop runs until the user asks
    /// for no further changes.
    pub fn create<R: BufRead, W: Write>(
        console: &mut Console<R, W>,
        recipe_dir: PathBuf,
    ) -> Result<Self> {
        console.clear()?;
        let name = console.prompt_line("Recipe Name: ")?;
        let mut recipe = Recipe {
            name,
            description: None,
            tags: IndexMap::new(),
            ingredients: IndexMap::new(),
            steps: Vec::new(),
            recipe_dir,
        };
        recipe.edit_ingredients(console)?;
        recipe.edit_steps(console)?;
        if console.confirm("Would you like to add a description?")? {
            recipe.prompt_description(console)?;
        }
        recipe.edit_tags(console)?;
        while !recipe.check(console)? {}
        Ok(recipe)
    }

    /// An empty submission leaves the description unset.
    fn prompt_description<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<()> {
        let description = console.prompt_line("Description: ")?;
        self.description = (!description.is_empty()).then_some(description);
        Ok(())
    }

    /// Reviews the ingredient map entry by entry, or populates it via the
    /// pair collector when still empty.
    pub fn edit_ingredients<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<()> {
        if self.ingredients.is_empty() {
            self.ingredients = console.collect_map("Ingredient", "Quantity")?;
            return Ok(());
        }
        loop {
            let mut options: Vec<String> = self.ingredients.keys().cloned().collect();
            options.push(ADD_INGREDIENTS.to_string());
            options.push(NO_CHANGE.to_string());
            console.clear()?;
            self.display_ingredients(console)?;
            let (index, _) =
                console.select("Which ingredient would you like to edit?", &options)?;
            // Sentinels sit after the ingredient keys; matching them by
            // position keeps an ingredient named like a sentinel editable.
            if index == self.ingredients.len() + 1 {
                return Ok(());
            }
            if index == self.ingredients.len() {
                let added = console.collect_map("Ingredient", "Quantity")?;
                self.ingredients.extend(added);
                continue;
            }
            let key = options[index].clone();
            console.line("Leave blank for no change")?;
            let replacement = console.prompt_line("Ingredient: ")?;
            let quantity = console.prompt_line("Quantity: ")?;
            if !replacement.is_empty() {
                // A renamed ingredient takes exactly the quantity typed here,
                // so a blank quantity drops the old one.
                self.ingredients.shift_remove(&key);
                self.ingredients.insert(replacement, quantity);
            } else if !quantity.is_empty() {
                self.ingredients.insert(key, quantity);
            }
        }
    }

    /// Reviews the step list entry by entry, or populates it via the list
    /// collector when still empty.
    pub fn edit_steps<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<()> {
        if self.steps.is_empty() {
            self.steps = console.collect_list("Step")?;
            return Ok(());
        }
        loop {
            let mut options = self.steps.clone();
            options.push(ADD_STEPS.to_string());
            options.push(NO_CHANGE.to_string());
            console.clear()?;
            self.display_steps(console)?;
            let (index, _) =
                console.select("Which step would you like to edit?", &options)?;
            if index == self.steps.len() + 1 {
                return Ok(());
            }
            if index == self.steps.len() {
                let added = console.collect_list("Step")?;
                self.steps.extend(added);
                continue;
            }
            console.line("Leave blank for no change")?;
            let replacement = console.prompt_line("Step: ")?;
            if !replacement.is_empty() {
                self.steps[index] = replacement;
            }
        }
    }

    /// Sets tag values category by category until the user is done.
    ///
    /// Only a category's fixed vocabulary is offered, so every stored tag
    /// value is valid by construction.
    pub fn edit_tags<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<()> {
        console.clear()?;
        loop {
            let mut options: Vec<&str> =
                TagCategory::ALL.iter().map(TagCategory::as_str).collect();
            options.push("no change");
            let (index, _) =
                console.select("Which tag would you like to edit", &options)?;
            let Some(category) = TagCategory::ALL.get(index) else {
                return Ok(());
            };
            let (_, value) = console
                .select("Which tag would you like to apply", category.vocabulary())?;
            self.tags.insert(category.as_str().to_string(), value);
        }
    }

    /// Displays the recipe and offers one round of changes.
    ///
    /// Returns `true` once the user asks for no further changes; any edit
    /// returns `false` so the caller re-runs the review.
    pub fn check<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<bool> {
        console.clear()?;
        self.display(console)?;
        console.line("")?;
        let options = ["Name", "Ingredients", "Steps", "Description", "Tags", "No"];
        let (index, _) =
            console.select("Would you like to make any changes?", &options)?;
        match index {
            0 => {
                self.name = console.prompt_line("Recipe Name: ")?;
                console.line(&format!("New name is: {}", self.name))?;
                Ok(false)
            }
            1 => {
                self.edit_ingredients(console)?;
                Ok(false)
            }
            2 => {
                self.edit_steps(console)?;
                Ok(false)
            }
            3 => {
                self.prompt_description(console)?;
                Ok(false)
            }
            4 => {
                self.edit_tags(console)?;
                Ok(false)
            }
            _ => Ok(true),
        }
    }
}
