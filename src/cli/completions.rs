use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    bundlehost completions bash > ~/.bash_completion.d/bundlehost\n\n\
                  Generate zsh completions:\n    bundlehost completions zsh > ~/.zfunc/_bundlehost\n\n\
                  Generate fish completions:\n    bundlehost completions fish > ~/.config/fish/completions/bundlehost.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
