//! Clipboard summary text and compose URLs

use serde::{Deserialize, Serialize};

use super::ShareRequest;
use crate::constants::{BRAND_HANDLE, BRAND_URL, FACEBOOK_SHARER_URL, SHARE_HASHTAGS, X_INTENT_URL};
use crate::stats::format_faps;

/// Where the compose window points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareNetwork {
    #[default]
    X,
    Facebook,
}

impl ShareNetwork {
    pub const ALL: [ShareNetwork; 2] = [ShareNetwork::X, ShareNetwork::Facebook];

    pub fn label(self) -> &'static str {
        match self {
            ShareNetwork::X => "X (Twitter)",
            ShareNetwork::Facebook => "Facebook",
        }
    }
}

/// Text written to the clipboard when the image could not be
pub fn summary_text(request: &ShareRequest) -> String {
    let stats = &request.stats;
    let mut text = format!(
        "🎉 {}\n\n💎 FAPS Count: {}\n",
        request.achievement,
        format_faps(stats.faps_count)
    );
    if let Some(rank) = stats.rank {
        text.push_str(&format!("🏆 Rank: #{}\n", rank));
    }
    text.push_str(&format!("👤 User: {}\n\n{}", stats.username, SHARE_HASHTAGS));
    text
}

/// Short post text used alongside a copied image, tagged with the brand handle once
pub fn short_text(request: &ShareRequest) -> String {
    let achievement = request.achievement.trim_end();
    if achievement.ends_with(BRAND_HANDLE) {
        achievement.to_string()
    } else {
        format!("{} {}", achievement, BRAND_HANDLE)
    }
}

/// Pre-filled compose URL for `network`
pub fn compose_url(network: ShareNetwork, text: &str) -> String {
    match network {
        ShareNetwork::X => format!("{}?text={}", X_INTENT_URL, urlencoding::encode(text)),
        ShareNetwork::Facebook => format!(
            "{}?u={}&quote={}",
            FACEBOOK_SHARER_URL,
            urlencoding::encode(BRAND_URL),
            urlencoding::encode(text)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserStats;

    fn request(rank: Option<u32>) -> ShareRequest {
        ShareRequest {
            achievement: "Rhythm Keeper".to_string(),
            stats: UserStats::new(rank, 2871.70, "FirmOrangutan3828"),
        }
    }

    fn query_param<'a>(url: &'a str, key: &str) -> Option<&'a str> {
        let query = url.split_once('?')?.1;
        query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    #[test]
    fn summary_includes_rank_only_when_present() {
        let with_rank = summary_text(&request(Some(4)));
        assert_eq!(
            with_rank,
            "🎉 Rhythm Keeper\n\n💎 FAPS Count: 2871.7\n🏆 Rank: #4\n👤 User: FirmOrangutan3828\n\n#FAPS #Achievement #Crypto"
        );

        let without = summary_text(&request(None));
        assert!(!without.contains("Rank"));

        // zero rank is treated as no rank
        assert!(!summary_text(&request(Some(0))).contains("Rank"));
    }

    #[test]
    fn x_url_round_trips_reserved_characters() {
        let text = "Fish & chips #1 🎉 100%?";
        let url = compose_url(ShareNetwork::X, text);
        assert!(url.starts_with("https://twitter.com/intent/tweet?text="));

        let encoded = query_param(&url, "text").unwrap();
        assert!(!encoded.contains('&'));
        assert!(!encoded.contains('#'));
        assert!(!encoded.contains(' '));
        assert_eq!(urlencoding::decode(encoded).unwrap(), text);
    }

    #[test]
    fn facebook_url_carries_page_and_quote() {
        let text = summary_text(&request(Some(4)));
        let url = compose_url(ShareNetwork::Facebook, &text);
        assert!(url.starts_with("https://www.facebook.com/sharer/sharer.php?u="));
        assert_eq!(urlencoding::decode(query_param(&url, "u").unwrap()).unwrap(), BRAND_URL);
        assert_eq!(urlencoding::decode(query_param(&url, "quote").unwrap()).unwrap(), text);
    }

    #[test]
    fn short_text_appends_handle_once() {
        assert_eq!(short_text(&request(None)), "Rhythm Keeper @Fractionai_xyz");

        let tagged = ShareRequest {
            achievement: "7 days of non-stop FAPS action! @Fractionai_xyz".to_string(),
            ..request(None)
        };
        assert_eq!(short_text(&tagged), tagged.achievement);
    }
}
