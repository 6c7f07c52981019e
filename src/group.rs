//! Grouping of label designs by the finish they are manufactured in.
//!
//! Every sheet is cut from a single substrate and printed with a single ink,
//! so only designs that agree on text colour, background colour, thickness
//! and adhesive style may share a sheet.

use crate::label::{AdhesiveStyle, ResolvedLabel, Thickness};
use crate::Colour;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// The substrate and ink combination a sheet is manufactured from
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GroupKey {
    pub text_colour: String,
    pub background: String,
    pub thickness: Thickness,
    pub style: AdhesiveStyle,
}

impl GroupKey {
    /// Device colours for the ink and the substrate, in that order
    pub fn colours(&self) -> (Colour, Colour) {
        (
            Colour::from_name(&self.text_colour),
            Colour::from_name(&self.background),
        )
    }
}

/// `"BLACK on WHITE 0.8mm"`, with `" Non AD"` appended for non-adhesive stock
impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} on {} {}mm",
            self.text_colour, self.background, self.thickness
        )?;
        if self.style == AdhesiveStyle::NonAdhesive {
            write!(f, " Non AD")?;
        }
        Ok(())
    }
}

/// Compute the group a resolved design belongs to
pub fn group_key(label: &ResolvedLabel) -> GroupKey {
    GroupKey {
        text_colour: label.text_colour.clone(),
        background: label.background.clone(),
        thickness: label.thickness,
        style: label.style,
    }
}

/// Stable partition of `items` by group key. Groups come back in the order
/// their first member appears, and members keep their relative input order.
pub fn partition<T, F>(items: impl IntoIterator<Item = T>, mut key_of: F) -> Vec<(GroupKey, Vec<T>)>
where
    F: FnMut(&T) -> GroupKey,
{
    let mut index: HashMap<GroupKey, usize> = HashMap::new();
    let mut groups: Vec<(GroupKey, Vec<T>)> = Vec::new();

    for item in items {
        let key = key_of(&item);
        match index.get(&key) {
            Some(&i) => groups[i].1.push(item),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push((key, vec![item]));
            }
        }
    }

    groups
}
