//! Configure command synthesis.

use super::profile::BuildProfile;
use super::request::{BuildEnvironment, CommandRequest};
use crate::error::{FfdepsError, Result};
use crate::shell::quote_word;

/// Turns a request into the literal configure command for one library.
///
/// Pure synthesis: nothing is executed here.
#[derive(Debug, Clone, Copy)]
pub struct ConfigCommandBuilder<'a> {
    profile: &'a BuildProfile,
}

impl<'a> ConfigCommandBuilder<'a> {
    pub fn new(profile: &'a BuildProfile) -> Self {
        Self { profile }
    }

    /// Build the command line.
    ///
    /// Order: base command, plain flags, keyword flags, environment flags,
    /// then the profile's fixed trailing flags. Any invalid flag aborts the
    /// whole command.
    ///
    /// Caller-supplied values are shell-quoted so each one reaches the build
    /// script as a single argument. The base command and trailing flags come
    /// from the catalog and are used as written.
    pub fn build(&self, request: &CommandRequest, env: &BuildEnvironment) -> Result<String> {
        let options = self.profile.options();
        let mut parts = vec![self.profile.command.clone()];

        for token in &request.plain {
            let spec = options.get_plain_argument(token)?;
            parts.push(format!("--{}", spec.name));
        }

        for (token, value) in &request.keyword {
            let spec = options.get_keyword_argument(token)?;
            if !spec.accepts_value(value) {
                return Err(FfdepsError::InvalidOptionValue {
                    option: spec.name.clone(),
                    value: value.clone(),
                    allowed: spec.allowed_display(),
                });
            }
            parts.push(keyword_word(&spec.name, value)?);
        }

        for (input, value) in env.entries() {
            if let Some(flag) = self.profile.environment.flag_for(input) {
                parts.push(keyword_word(flag, value)?);
            }
        }

        parts.extend(self.profile.trailing.iter().cloned());

        let command = parts.join(" ");
        tracing::debug!(library = %self.profile.library, command = %command, "synthesized configure command");
        Ok(command)
    }
}

/// `--name=value` with the value quoted for the shell.
fn keyword_word(name: &str, value: &str) -> Result<String> {
    if value.contains('\0') {
        return Err(FfdepsError::InvalidOptionValue {
            option: name.to_string(),
            value: value.replace('\0', "\\0"),
            allowed: "text without NUL bytes".to_string(),
        });
    }
    Ok(format!("--{}={}", name, quote_word(value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configure::profile::EnvironmentFlags;
    use crate::options::{OptionDef, OptionRegistry};

    fn x264() -> BuildProfile {
        let options = OptionRegistry::from_defs([
            OptionDef::flag("help").alias("h"),
            OptionDef::keyword("prefix"),
            OptionDef::flag("disable-cli"),
            OptionDef::flag("enable-static"),
            OptionDef::keyword("bit-depth").values(&["all", "8", "10"]),
            OptionDef::keyword("chroma-format").values(&["all", "420", "422", "444"]),
            OptionDef::keyword("host"),
        ])
        .unwrap();
        BuildProfile::new("libx264", "./configure")
            .with_options(options)
            .with_trailing(&["--enable-shared", "--enable-pic"])
            .with_environment(EnvironmentFlags {
                prefix: Some("prefix".into()),
                host: Some("host".into()),
                ..Default::default()
            })
    }

    #[test]
    fn builds_plain_and_keyword_flags() {
        let profile = x264();
        let request = CommandRequest::new()
            .flag("disable-cli")
            .set("bit-depth", "10");
        let cmd = ConfigCommandBuilder::new(&profile)
            .build(&request, &BuildEnvironment::default())
            .unwrap();
        assert_eq!(
            cmd,
            "./configure --disable-cli --bit-depth=10 --enable-shared --enable-pic"
        );
    }

    #[test]
    fn aliases_render_canonical_name() {
        let profile = x264();
        let request = CommandRequest::new().flag("-h");
        let cmd = ConfigCommandBuilder::new(&profile)
            .build(&request, &BuildEnvironment::default())
            .unwrap();
        assert!(cmd.starts_with("./configure --help "));
    }

    #[test]
    fn environment_flags_come_before_trailing_defaults() {
        let profile = x264();
        let env = BuildEnvironment {
            prefix: Some("/usr/local".into()),
            host: Some("x86_64-w64-mingw32".into()),
            build: Some("x86_64-pc-linux-gnu".into()),
            sysroot: None,
        };
        let cmd = ConfigCommandBuilder::new(&profile)
            .build(&CommandRequest::new(), &env)
            .unwrap();
        // build triplet is not mapped for this library
        assert_eq!(
            cmd,
            "./configure --prefix=/usr/local --host=x86_64-w64-mingw32 --enable-shared --enable-pic"
        );
    }

    #[test]
    fn value_outside_allowed_set_fails() {
        let profile = x264();
        let request = CommandRequest::new().set("bit-depth", "12");
        let err = ConfigCommandBuilder::new(&profile)
            .build(&request, &BuildEnvironment::default())
            .unwrap_err();
        match err {
            FfdepsError::InvalidOptionValue {
                option,
                value,
                allowed,
            } => {
                assert_eq!(option, "bit-depth");
                assert_eq!(value, "12");
                assert_eq!(allowed, "all, 8, 10");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn keyword_used_bare_fails() {
        let profile = x264();
        let request = CommandRequest::new().flag("prefix");
        let err = ConfigCommandBuilder::new(&profile)
            .build(&request, &BuildEnvironment::default())
            .unwrap_err();
        assert!(matches!(err, FfdepsError::InvalidArgumentUsage { .. }));
    }

    #[test]
    fn plain_used_with_value_fails() {
        let profile = x264();
        let request = CommandRequest::new().set("disable-cli", "yes");
        let err = ConfigCommandBuilder::new(&profile)
            .build(&request, &BuildEnvironment::default())
            .unwrap_err();
        assert!(matches!(err, FfdepsError::InvalidArgumentUsage { .. }));
    }

    #[test]
    fn unknown_flag_fails() {
        let profile = x264();
        let request = CommandRequest::new().flag("enable-everything");
        let err = ConfigCommandBuilder::new(&profile)
            .build(&request, &BuildEnvironment::default())
            .unwrap_err();
        assert!(matches!(err, FfdepsError::UnknownOption { .. }));
    }

    #[test]
    fn build_is_deterministic() {
        let profile = x264();
        let request = CommandRequest::new()
            .flag("enable-static")
            .set("chroma-format", "420")
            .set("prefix", "/opt/x264");
        let env = BuildEnvironment {
            host: Some("aarch64-linux-gnu".into()),
            ..Default::default()
        };
        let builder = ConfigCommandBuilder::new(&profile);
        let first = builder.build(&request, &env).unwrap();
        let second = builder.build(&request, &env).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_request_yields_base_and_trailing() {
        let profile = BuildProfile::new("x", "./configure");
        let cmd = ConfigCommandBuilder::new(&profile)
            .build(&CommandRequest::new(), &BuildEnvironment::default())
            .unwrap();
        assert_eq!(cmd, "./configure");
    }

    fn extra_flags_profile(command: &str) -> BuildProfile {
        let options = OptionRegistry::from_defs([OptionDef::keyword("extra-cflags")]).unwrap();
        BuildProfile::new("libdemo", command)
            .with_options(options)
            .with_environment(EnvironmentFlags {
                prefix: Some("prefix".into()),
                ..Default::default()
            })
    }

    #[test]
    fn values_with_spaces_stay_one_word() {
        let profile = extra_flags_profile("./configure");
        let request = CommandRequest::new().set("extra-cflags", "-O2 -g");
        let cmd = ConfigCommandBuilder::new(&profile)
            .build(&request, &BuildEnvironment::default())
            .unwrap();
        assert_eq!(
            shlex::split(&cmd).unwrap(),
            vec!["./configure", "--extra-cflags=-O2 -g"]
        );
    }

    #[test]
    fn environment_values_cannot_inject_commands() {
        let profile = extra_flags_profile("./configure");
        let env = BuildEnvironment {
            prefix: Some("/opt/x;echo INJECTED".into()),
            ..Default::default()
        };
        let cmd = ConfigCommandBuilder::new(&profile)
            .build(&CommandRequest::new(), &env)
            .unwrap();
        assert_eq!(
            shlex::split(&cmd).unwrap(),
            vec!["./configure", "--prefix=/opt/x;echo INJECTED"]
        );
    }

    #[cfg(unix)]
    #[test]
    fn script_receives_values_verbatim() {
        use crate::shell::{execute, CommandOptions};

        let profile = extra_flags_profile("printf '[%s]\\n'");
        let request = CommandRequest::new().set("extra-cflags", "-O2 -g");
        let env = BuildEnvironment {
            prefix: Some("/opt/x;echo INJECTED".into()),
            ..Default::default()
        };
        let cmd = ConfigCommandBuilder::new(&profile)
            .build(&request, &env)
            .unwrap();

        let result = execute(&cmd, &CommandOptions::captured(None)).unwrap();
        assert!(result.success);
        assert_eq!(
            result.stdout,
            "[--extra-cflags=-O2 -g]\n[--prefix=/opt/x;echo INJECTED]\n"
        );
    }

    #[test]
    fn nul_byte_in_value_is_rejected() {
        let profile = extra_flags_profile("./configure");
        let request = CommandRequest::new().set("extra-cflags", "a\0b");
        let err = ConfigCommandBuilder::new(&profile)
            .build(&request, &BuildEnvironment::default())
            .unwrap_err();
        assert!(matches!(err, FfdepsError::InvalidOptionValue { ref option, .. } if option == "extra-cflags"));
    }
}
