pub mod config_ops;
pub mod lexicon_ops;
pub mod translate_ops;
