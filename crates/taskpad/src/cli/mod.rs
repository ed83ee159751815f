/*
[INPUT]:  Parsed CLI arguments and effective configuration
[OUTPUT]: One-shot list/create commands and interactive prompts
[POS]:    CLI layer of the taskpad binary
[UPDATE]: When adding subcommands
*/

pub mod commands;
pub mod init;
