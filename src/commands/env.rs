use anyhow::Result;

use skipper::{Config, Environment};

/// Resolve and print a deployment environment.
pub fn cmd_env(config: &Config, name: &str) -> Result<()> {
    let env = config.environment(name)?;
    print!("{}", render_environment(name, &env));
    Ok(())
}

fn render_environment(name: &str, env: &Environment) -> String {
    let mut out = String::new();

    out.push_str(&format!("Environment: {}\n", name));
    if !env.description.is_empty() {
        out.push_str(&format!("  description: {}\n", env.description));
    }
    out.push_str(&format!("  hosts:       {}\n", env.hosts.join(", ")));
    out.push_str(&format!("  user:        {}\n", env.user));
    out.push_str(&format!("  key file:    {}\n", env.key_file.display()));
    out.push_str(&format!("  remote path: {}\n", env.remote_path));

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_staging_environment() {
        let rendered = render_environment("staging", &Environment::staging());

        assert!(rendered.contains("Environment: staging"));
        assert!(rendered.contains("hosts:       138.197.125.212"));
        assert!(rendered.contains("user:        root"));
        assert!(rendered.contains("key file:    ~/.ssh/id_rsa"));
        assert!(rendered.contains("remote path: /var/www/html"));
    }

    #[test]
    fn render_skips_empty_description() {
        let mut env = Environment::staging();
        env.description.clear();
        let rendered = render_environment("staging", &env);
        assert!(!rendered.contains("description"));
    }

    #[test]
    fn cmd_env_unknown_name_fails() {
        let err = cmd_env(&Config::default(), "production").unwrap_err();
        assert!(err.to_string().contains("unknown environment 'production'"));
    }
}
