use crate::{Error, Result};

#[derive(Debug, Clone, Default)]
pub struct CmdArgs {
    pub config: Option<String>,
    pub input: Option<String>,
    pub output: Option<String>,
    pub source: Option<String>,
}

impl CmdArgs {
    pub fn parse(args: Vec<String>) -> Result<Self> {
        let mut config = String::new();
        let mut input = String::new();
        let mut output = String::new();
        let mut source = String::new();
        {
            let mut ap = argparse::ArgumentParser::new();
            ap.set_description("Merge freshly collected news items into news.json");
            ap.refer(&mut config).add_option(
                &["-c", "--config"],
                argparse::Store,
                "Config file path; defaults are used when omitted",
            );
            ap.refer(&mut input).add_option(
                &["-i", "--input"],
                argparse::Store,
                "JSON array of newly collected items; '-' reads stdin",
            );
            ap.refer(&mut output).add_option(
                &["-o", "--output"],
                argparse::Store,
                "Output file; default is news.json",
            );
            ap.refer(&mut source).add_option(
                &["-s", "--source"],
                argparse::Store,
                "URL of the published news list",
            );

            match ap.parse(args, &mut std::io::stdout(), &mut std::io::stderr()) {
                Ok(()) => {}
                Err(_) => {
                    return Err(Error::Args);
                }
            }
        }

        Ok(CmdArgs {
            config: non_empty(config),
            input: non_empty(input),
            output: non_empty(output),
            source: non_empty(source),
        })
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod test {
    use super::CmdArgs;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(std::string::ToString::to_string).collect()
    }

    #[test]
    fn test_defaults() {
        let parsed = CmdArgs::parse(args(&["news-json-updater"])).unwrap();
        assert!(parsed.config.is_none());
        assert!(parsed.input.is_none());
        assert!(parsed.output.is_none());
        assert!(parsed.source.is_none());
    }

    #[test]
    fn test_all_options() {
        let parsed = CmdArgs::parse(args(&[
            "news-json-updater",
            "-c",
            "config.json",
            "--input",
            "collected.json",
            "-o",
            "out/news.json",
            "--source",
            "http://127.0.0.1:8080/news.json",
        ]))
        .unwrap();
        assert_eq!(parsed.config.as_deref(), Some("config.json"));
        assert_eq!(parsed.input.as_deref(), Some("collected.json"));
        assert_eq!(parsed.output.as_deref(), Some("out/news.json"));
        assert_eq!(
            parsed.source.as_deref(),
            Some("http://127.0.0.1:8080/news.json")
        );
    }

    #[test]
    fn test_unknown_option() {
        assert!(CmdArgs::parse(args(&["news-json-updater", "--bogus"])).is_err());
    }
}
