//! Level-sequence encoding of rooted trees

mod level_sequence;

pub use level_sequence::LevelSequence;
