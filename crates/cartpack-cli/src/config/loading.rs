use crate::cli::{CheckArgs, GenerateArgs};
use crate::config::{Overrides, Settings};
use crate::error::{CliError, Result};
use cartpack_config::BuildMode;
use figment::{
    Figment,
    providers::{Env, Serialized},
};

const ENV_PREFIX: &str = "CARTPACK_";
const ENV_KEYS: &[&str] = &["root", "mode", "output", "pretty"];

impl Settings {
    /// Load settings for the generate command.
    pub fn for_generate(args: &GenerateArgs) -> Result<Self> {
        let mode = if args.production {
            Some(BuildMode::Production)
        } else {
            args.mode
        };

        Self::load(Overrides {
            root: args.root.clone(),
            mode,
            output: args.output.clone(),
            pretty: args.pretty.then_some(true),
        })
    }

    /// Load settings for the check command.
    pub fn for_check(args: &CheckArgs) -> Result<Self> {
        Self::load(Overrides {
            root: args.root.clone(),
            ..Overrides::default()
        })
    }

    pub(crate) fn load(overrides: Overrides) -> Result<Self> {
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Env::prefixed(ENV_PREFIX).only(ENV_KEYS))
            .merge(Serialized::defaults(overrides))
            .extract()
            .map_err(|e| CliError::Settings {
                message: e.to_string(),
                hint: "CARTPACK_MODE accepts 'development' or 'production'".to_string(),
            })
    }
}
