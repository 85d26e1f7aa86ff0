//! Benchmark operations that get a data file and a plot each.
//!
//! Names are matched against log lines by plain substring containment, so an
//! operation whose name is contained in another (`Iterate` in
//! `IterateAndModify`) also picks up the longer operation's lines.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Operation {
    AddAtBeginning,
    AddAtEnd,
    AddRandom,
    AppendCollection,
    GetRandom,
    InsertCollection,
    Iterate,
    IterateAndModify,
    PrependCollection,
    RemoveFromBeginning,
    RemoveFromEnd,
    RemoveRandom,
    RemoveRange,
}

impl Operation {
    /// Processing order.
    pub const ALL: [Operation; 13] = [
        Operation::AddAtBeginning,
        Operation::AddAtEnd,
        Operation::AddRandom,
        Operation::AppendCollection,
        Operation::GetRandom,
        Operation::InsertCollection,
        Operation::Iterate,
        Operation::IterateAndModify,
        Operation::PrependCollection,
        Operation::RemoveFromBeginning,
        Operation::RemoveFromEnd,
        Operation::RemoveRandom,
        Operation::RemoveRange,
    ];

    /// Method name as it appears in the benchmark log and in output file names.
    pub fn name(self) -> &'static str {
        match self {
            Operation::AddAtBeginning => "AddAtBeginning",
            Operation::AddAtEnd => "AddAtEnd",
            Operation::AddRandom => "AddRandom",
            Operation::AppendCollection => "AppendCollection",
            Operation::GetRandom => "GetRandom",
            Operation::InsertCollection => "InsertCollection",
            Operation::Iterate => "Iterate",
            Operation::IterateAndModify => "IterateAndModify",
            Operation::PrependCollection => "PrependCollection",
            Operation::RemoveFromBeginning => "RemoveFromBeginning",
            Operation::RemoveFromEnd => "RemoveFromEnd",
            Operation::RemoveRandom => "RemoveRandom",
            Operation::RemoveRange => "RemoveRange",
        }
    }

    /// Human-readable plot title.
    pub fn title(self) -> &'static str {
        match self {
            Operation::AddAtBeginning => "Add at beginning",
            Operation::AddAtEnd => "Add at end",
            Operation::AddRandom => "Add at random spot",
            Operation::AppendCollection => "Append collection",
            Operation::GetRandom => "Get random element",
            Operation::InsertCollection => "Insert collection",
            Operation::Iterate => "Iterate",
            Operation::IterateAndModify => "Iterate and modify",
            Operation::PrependCollection => "Prepend collection",
            Operation::RemoveFromBeginning => "Remove from beginning",
            Operation::RemoveFromEnd => "Remove from end",
            Operation::RemoveRandom => "Remove random element",
            Operation::RemoveRange => "Remove range",
        }
    }

    pub fn data_file_name(self) -> String {
        format!("{}.dat", self.name())
    }

    pub fn script_file_name(self) -> String {
        format!("{}.plt", self.name())
    }

    pub fn image_file_name(self) -> String {
        format!("{}.png", self.name())
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
