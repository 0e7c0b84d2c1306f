//! Process execution for git and the configured site commands.

pub mod command;

pub use command::{
    display_command, execute, execute_check, execute_quiet, execute_shell,
    execute_shell_streaming, CommandOptions, CommandResult, OutputCallback, OutputLine,
};
