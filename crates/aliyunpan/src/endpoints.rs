//! Upstream endpoint locations.

pub const TOKEN_URL: &str = "https://auth.aliyundrive.com/v2/account/token";
pub const SIGN_IN_LIST_URL: &str = "https://member.aliyundrive.com/v1/activity/sign_in_list";
pub const SIGN_IN_REWARD_URL: &str = "https://member.aliyundrive.com/v1/activity/sign_in_reward";

/// Set of URLs the bindings talk to.
///
/// [`Endpoints::default`] points at the production service; other values are
/// only useful for pointing the client at a local stand-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub token: String,
    pub sign_in_list: String,
    pub sign_in_reward: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            token: TOKEN_URL.to_string(),
            sign_in_list: SIGN_IN_LIST_URL.to_string(),
            sign_in_reward: SIGN_IN_REWARD_URL.to_string(),
        }
    }
}

impl Endpoints {
    /// Build endpoints rooted at `auth_base` and `member_base`
    /// (e.g. `http://127.0.0.1:8080`), keeping the production paths.
    pub fn with_bases(auth_base: &str, member_base: &str) -> Self {
        let auth_base = auth_base.trim_end_matches('/');
        let member_base = member_base.trim_end_matches('/');
        Self {
            token: format!("{auth_base}/v2/account/token"),
            sign_in_list: format!("{member_base}/v1/activity/sign_in_list"),
            sign_in_reward: format!("{member_base}/v1/activity/sign_in_reward"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        let endpoints = Endpoints::default();
        assert_eq!(endpoints.token, TOKEN_URL);
        assert_eq!(endpoints.sign_in_list, SIGN_IN_LIST_URL);
        assert_eq!(endpoints.sign_in_reward, SIGN_IN_REWARD_URL);
    }

    #[test]
    fn test_with_bases_strips_trailing_slash() {
        let endpoints = Endpoints::with_bases("http://127.0.0.1:1/", "http://127.0.0.1:2");
        assert_eq!(endpoints.token, "http://127.0.0.1:1/v2/account/token");
        assert_eq!(
            endpoints.sign_in_reward,
            "http://127.0.0.1:2/v1/activity/sign_in_reward"
        );
    }
}
