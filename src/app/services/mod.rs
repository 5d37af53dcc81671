pub mod preset_resolver;

pub use preset_resolver::{
    CreatePresetOptions, DeleteOutcome, PresetListFilter, PresetListing, PresetLookup,
    PresetResolver,
};
