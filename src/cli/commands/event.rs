use clap::{Arg, ArgMatches, Command};

pub const ARG_TOKEN: &str = "token";
pub const ARG_SITE_KEY: &str = "site-key";

#[derive(Debug)]
pub struct Options {
    pub token: String,
    pub site_key: String,
}

impl Options {
    /// Parse the client event from matches.
    ///
    /// # Errors
    /// Returns an error if the token or the site key is missing.
    pub fn parse(matches: &ArgMatches) -> anyhow::Result<Self> {
        let get_required = |id: &str| {
            matches
                .get_one::<String>(id)
                .cloned()
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| anyhow::anyhow!("missing required argument: --{id}"))
        };

        Ok(Self {
            token: get_required(ARG_TOKEN)?,
            site_key: get_required(ARG_SITE_KEY)?,
        })
    }
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_TOKEN)
                .short('t')
                .long(ARG_TOKEN)
                .help("Token generated by the reCAPTCHA JavaScript on the client")
                .env("RECAPTCHA_TOKEN")
                .required(true),
        )
        .arg(
            Arg::new(ARG_SITE_KEY)
                .short('s')
                .long(ARG_SITE_KEY)
                .help("reCAPTCHA site key the token was generated for")
                .env("RECAPTCHA_SITE_KEY")
                .required(true),
        )
}
