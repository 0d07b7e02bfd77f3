use super::command_stdout;
use std::env;

/// `user@hostname` identity text.
pub async fn host_text() -> String {
    let user = match env::var("USER").or_else(|_| env::var("LOGNAME")) {
        Ok(user) if !user.is_empty() => user,
        _ => command_stdout("id", &["-un"])
            .await
            .unwrap_or_else(|| "?".to_string()),
    };
    let hostname = command_stdout("hostname", &[])
        .await
        .unwrap_or_else(|| "?".to_string());
    format!("{}@{}", user, hostname)
}
