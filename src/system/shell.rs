//! Command shell interface for embedded systems.
//!
//! A fixed-buffer, `no_std`-friendly command line: characters arrive one
//! at a time from the console port, CR or LF executes the accumulated
//! line, and the named command's handler runs with the whitespace-split
//! arguments. Handlers receive a mutable application context, so commands
//! can drive stateful subsystems (the HTTP client, for one) without
//! process globals.
//!
//! Each command declares how many positional arguments it accepts; the
//! shell rejects invocations outside those bounds before the handler ever
//! runs.
//!
//! # Examples
//!
//! ```rust
//! use libmodem::system::shell::{Shell, ShellResult};
//!
//! struct Ctx {
//!     greetings: u32,
//! }
//!
//! fn hello(ctx: &mut Ctx, _argc: usize, _argv: &[&str]) -> ShellResult {
//!     ctx.greetings += 1;
//!     ShellResult::Ok
//! }
//!
//! let mut shell = Shell::new();
//! shell.register_command("hello", "Say hello", 0, 1, hello);
//!
//! let mut ctx = Ctx { greetings: 0 };
//! shell.input(b"hello\r", &mut ctx);
//! assert_eq!(ctx.greetings, 1);
//! ```

use core::str;

/// Maximum length of one command line.
pub const MAX_BUFFER_SIZE: usize = 256;

/// Maximum number of whitespace-split arguments, command name included.
pub const MAX_ARGS: usize = 8;

/// Maximum number of commands registered at runtime.
pub const MAX_DYNAMIC_COMMANDS: usize = 16;

const ASCII_BACKSPACE: u8 = 0x08;
const ASCII_LF: u8 = 0x0A;
const ASCII_CR: u8 = 0x0D;
const ASCII_DEL: u8 = 0x7F;

/// Result type for shell operations.
#[derive(Debug, PartialEq, Eq)]
pub enum ShellResult {
    /// Operation completed successfully.
    Ok,
    /// An invalid parameter was provided.
    InvalidParameter,
    /// No room for another dynamic command.
    OutOfMemory,
    /// The input line exceeded [`MAX_BUFFER_SIZE`].
    BufferOverflow,
}

/// Function signature for command handlers.
///
/// `argv[0]` is the command name; `argc` counts it. The context is
/// whatever application state the shell owner threads through
/// [`Shell::input`].
pub type CommandFn<Ctx> = fn(ctx: &mut Ctx, argc: usize, argv: &[&str]) -> ShellResult;

/// Function signature for shell output handlers.
pub type OutputFn = fn(&str);

/// A registered command: name, help text, argument bounds, handler.
///
/// `min_args` and `max_args` bound the positional arguments (the command
/// name itself not counted). An invocation outside the bounds is rejected
/// before the handler runs.
#[derive(Debug)]
pub struct Command<Ctx> {
    /// The command name as typed by the user.
    pub name: &'static str,
    /// One-line description shown by `list` and `-h`.
    pub description: &'static str,
    /// Minimum number of positional arguments.
    pub min_args: usize,
    /// Maximum number of positional arguments.
    pub max_args: usize,
    /// The function implementing the command.
    pub handler: CommandFn<Ctx>,
}

impl<Ctx> Clone for Command<Ctx> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Ctx> Copy for Command<Ctx> {}

/// Main shell structure managing input processing and command dispatch.
pub struct Shell<Ctx: 'static> {
    buffer: [u8; MAX_BUFFER_SIZE],
    buffer_len: usize,

    dynamic_commands: [Option<Command<Ctx>>; MAX_DYNAMIC_COMMANDS],
    dynamic_command_count: usize,
    static_commands: Option<&'static [Command<Ctx>]>,

    output_fn: Option<OutputFn>,

    echo_enabled: bool,
    list_command_enabled: bool,
    help_enabled: bool,
}

impl<Ctx> core::fmt::Debug for Shell<Ctx> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Shell")
            .field("buffer_len", &self.buffer_len)
            .field("dynamic_command_count", &self.dynamic_command_count)
            .finish()
    }
}

impl<Ctx> Default for Shell<Ctx> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Ctx> Shell<Ctx> {
    /// Create a shell with echo, help, and the `list` command enabled and
    /// no commands registered.
    pub fn new() -> Self {
        Self {
            buffer: [0; MAX_BUFFER_SIZE],
            buffer_len: 0,
            dynamic_commands: [None; MAX_DYNAMIC_COMMANDS],
            dynamic_command_count: 0,
            static_commands: None,
            output_fn: None,
            echo_enabled: true,
            list_command_enabled: true,
            help_enabled: true,
        }
    }

    /// Set the output function for shell responses.
    pub fn set_output_function(&mut self, output_fn: OutputFn) -> ShellResult {
        self.output_fn = Some(output_fn);
        ShellResult::Ok
    }

    /// Enable or disable input echoing.
    pub fn set_echo(&mut self, enabled: bool) {
        self.echo_enabled = enabled;
    }

    /// Enable or disable the built-in `list` command.
    pub fn set_list_command(&mut self, enabled: bool) {
        self.list_command_enabled = enabled;
    }

    /// Enable or disable `-h`/`--help` handling.
    pub fn set_help(&mut self, enabled: bool) {
        self.help_enabled = enabled;
    }

    /// Register a command at runtime.
    ///
    /// `min_args..=max_args` bounds the positional argument count.
    /// Returns [`ShellResult::InvalidParameter`] for an empty name or
    /// inverted bounds, [`ShellResult::OutOfMemory`] when
    /// [`MAX_DYNAMIC_COMMANDS`] is reached.
    pub fn register_command(
        &mut self,
        name: &'static str,
        description: &'static str,
        min_args: usize,
        max_args: usize,
        handler: CommandFn<Ctx>,
    ) -> ShellResult {
        if name.is_empty() || min_args > max_args {
            return ShellResult::InvalidParameter;
        }

        if self.dynamic_command_count >= MAX_DYNAMIC_COMMANDS {
            return ShellResult::OutOfMemory;
        }

        self.dynamic_commands[self.dynamic_command_count] = Some(Command {
            name,
            description,
            min_args,
            max_args,
            handler,
        });
        self.dynamic_command_count += 1;

        ShellResult::Ok
    }

    /// Register commands defined at compile time.
    pub fn register_static_commands(&mut self, commands: &'static [Command<Ctx>]) -> ShellResult {
        self.static_commands = Some(commands);
        ShellResult::Ok
    }

    /// Process console input.
    ///
    /// CR or LF executes the accumulated line against `ctx`;
    /// backspace/DEL edits; printable ASCII accumulates. Returns
    /// [`ShellResult::BufferOverflow`] when a line exceeds
    /// [`MAX_BUFFER_SIZE`].
    pub fn input(&mut self, data: &[u8], ctx: &mut Ctx) -> ShellResult {
        for &byte in data {
            match byte {
                ASCII_CR | ASCII_LF => {
                    if self.echo_enabled {
                        self.output(if byte == ASCII_CR { "\r" } else { "\n" });
                    }
                    self.process_command(ctx);
                    self.reset_buffer();
                }
                ASCII_BACKSPACE | ASCII_DEL => {
                    if self.buffer_len > 0 {
                        self.buffer_len -= 1;
                        self.buffer[self.buffer_len] = 0;
                        if self.echo_enabled {
                            self.output("\x08 \x08");
                        }
                    }
                }
                _ => {
                    if (0x20..0x7F).contains(&byte) {
                        if self.buffer_len < MAX_BUFFER_SIZE - 1 {
                            self.buffer[self.buffer_len] = byte;
                            self.buffer_len += 1;

                            if self.echo_enabled {
                                let ch = [byte];
                                if let Ok(s) = str::from_utf8(&ch) {
                                    self.output(s);
                                }
                            }
                        } else {
                            return ShellResult::BufferOverflow;
                        }
                    }
                }
            }
        }

        ShellResult::Ok
    }

    fn output(&self, text: &str) {
        if let Some(output_fn) = self.output_fn {
            output_fn(text);
        }
    }

    fn reset_buffer(&mut self) {
        self.buffer.fill(0);
        self.buffer_len = 0;
    }

    fn find_command(&self, name: &str) -> Option<Command<Ctx>> {
        self.dynamic_commands[..self.dynamic_command_count]
            .iter()
            .flatten()
            .find(|cmd| cmd.name == name)
            .copied()
            .or_else(|| {
                self.static_commands
                    .and_then(|commands| commands.iter().find(|cmd| cmd.name == name))
                    .copied()
            })
    }

    fn process_command(&mut self, ctx: &mut Ctx) {
        let line = match str::from_utf8(&self.buffer[..self.buffer_len]) {
            Ok(line) => line,
            Err(_) => {
                self.output("Error parsing command\r\n");
                return;
            }
        };

        let mut argv = [""; MAX_ARGS];
        let mut argc = 0;
        for word in line.split_ascii_whitespace() {
            if argc == MAX_ARGS {
                break;
            }
            argv[argc] = word;
            argc += 1;
        }

        if argc == 0 {
            return;
        }

        let name = argv[0];

        if self.help_enabled && argc == 2 && (argv[1] == "-h" || argv[1] == "--help") {
            self.show_command_help(name);
            return;
        }

        if let Some(cmd) = self.find_command(name) {
            let positional = argc - 1;
            if positional < cmd.min_args || positional > cmd.max_args {
                self.output(cmd.name);
                self.output(": invalid argument count\r\n");
                return;
            }
            (cmd.handler)(ctx, argc, &argv[..argc]);
            return;
        }

        if self.list_command_enabled && name == "list" {
            self.list_commands();
            return;
        }

        if self.list_command_enabled {
            self.output("Unknown command. Type 'list' to see available commands.\r\n");
        } else {
            self.output("Unknown command.\r\n");
        }
    }

    fn show_command_help(&self, name: &str) {
        match self.find_command(name) {
            Some(cmd) => {
                self.output(cmd.description);
                self.output("\r\n");
            }
            None => self.output("Command not found.\r\n"),
        }
    }

    fn list_commands(&self) {
        self.output("Available commands:\r\n");

        for cmd in self.dynamic_commands[..self.dynamic_command_count]
            .iter()
            .flatten()
        {
            self.output(cmd.name);
            self.output("\t\t");
            self.output(cmd.description);
            self.output("\r\n");
        }

        if let Some(static_commands) = self.static_commands {
            for cmd in static_commands {
                self.output(cmd.name);
                self.output("\t\t");
                self.output(cmd.description);
                self.output("\r\n");
            }
        }
    }
}
