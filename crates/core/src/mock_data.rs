//! Constant dashboard dataset
//!
//! All statistics shown by the dashboard come from here; nothing is fetched.

use chrono::NaiveDate;

use crate::models::{
    AccountProfile, ActivityEntry, ActivityKind, DashboardData, EarningsPoint, EarningsSummary,
    Engagements, LeaderboardRow, PostAuthor, TopPost,
};

/// Username of the viewer in the mock leaderboard
pub const CURRENT_USERNAME: &str = "FirmOrangutan3828";

pub fn dashboard() -> DashboardData {
    DashboardData {
        summary: EarningsSummary {
            total: 2871.70,
            daily: 0.0,
            previous_daily: 0.0,
            weekly: 0.0,
            previous_weekly: 300.0,
            rank: 4,
            streak: 7,
        },
        chart: chart(),
        sparkline: vec![0.0, 170.0, 95.0, 0.0, 0.0, 0.0, 250.0, 0.0, 300.0, 0.0, 0.0, 0.0, 0.0],
        activities: activities(),
        posts: posts(),
        leaderboard: leaderboard(),
        profile: AccountProfile {
            handle: "@cryptomaster2024".to_string(),
            avatar_url: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=40&h=40&fit=crop&crop=face&auto=format".to_string(),
            score: 847,
        },
    }
}

fn chart() -> Vec<EarningsPoint> {
    // Every other day from 8 Jun to 2 Jul
    const EARNINGS: [f64; 13] = [0.0, 170.0, 95.0, 0.0, 0.0, 0.0, 250.0, 0.0, 300.0, 0.0, 0.0, 0.0, 0.0];
    let Some(start) = NaiveDate::from_ymd_opt(2025, 6, 8) else {
        return Vec::new();
    };
    EARNINGS
        .iter()
        .enumerate()
        .map(|(i, earnings)| EarningsPoint {
            date: start + chrono::Duration::days(i as i64 * 2),
            earnings: *earnings,
        })
        .collect()
}

fn activities() -> Vec<ActivityEntry> {
    [
        (ActivityKind::Like, "Liked a crypto tweet", "2 hours ago"),
        (ActivityKind::Retweet, "Retweeted FAPS announcement", "4 hours ago"),
        (ActivityKind::Comment, "Commented on DeFi discussion", "6 hours ago"),
        (ActivityKind::Mention, "Mentioned @FAPS in your post", "1 day ago"),
        (ActivityKind::Like, "Liked blockchain news", "1 day ago"),
        (ActivityKind::Retweet, "Retweeted market analysis", "2 days ago"),
    ]
    .into_iter()
    .map(|(kind, description, timestamp)| ActivityEntry {
        kind,
        description: description.to_string(),
        timestamp_label: timestamp.to_string(),
    })
    .collect()
}

fn author(name: &str, handle: &str, avatar: &str, verified: bool) -> PostAuthor {
    PostAuthor {
        name: name.to_string(),
        handle: handle.to_string(),
        avatar_url: format!(
            "https://images.unsplash.com/{avatar}?w=40&h=40&fit=crop&crop=face&auto=format"
        ),
        verified,
    }
}

fn posts() -> Vec<TopPost> {
    vec![
        TopPost {
            author: author("Ahmed ElSabahy", "@120230Arafa", "photo-1472099645785-5658abf4ff4e", false),
            content: "Finally the target hit 100k fractals 🎉🔥\nBut a still not included in top 100 , the next step is top 100 😤\nCan I get congrats @FractionAI_xyz".to_string(),
            media_url: None,
            tweet_url: "https://twitter.com/120230Arafa/status/1808245789123456789".to_string(),
            engagements: Engagements { likes: 46, comments: 26, retweets: 1, views: 2100 },
            timestamp_label: "Jul 3".to_string(),
            is_top: true,
        },
        TopPost {
            author: author("CryptoWhale", "@whale_hunter", "photo-1560250097-0b93528c311a", true),
            content: String::new(),
            media_url: Some("https://images.unsplash.com/photo-1618160702438-9b02ab6515c9?w=400&h=300&fit=crop&auto=format".to_string()),
            tweet_url: "https://twitter.com/whale_hunter/status/1807892345678901234".to_string(),
            engagements: Engagements { likes: 89, comments: 12, retweets: 24, views: 3420 },
            timestamp_label: "Jul 2".to_string(),
            is_top: true,
        },
        TopPost {
            author: author("Rafero", "@auguraemal323", "photo-1507003211169-0a1dd7228f2d", false),
            content: "A short introduction of @FractionAI_xyz building on @NEARProtocol\n\nFounder is @Oxshah🔥who worked as:\n\n- ML strat analyst at @GoldmanSachs\n- Software engineering intern at @Microsoft\n- Data scientist at @augutan\n- Graduate teaching assistant at @iitdelhi\n- Quantitative".to_string(),
            media_url: None,
            tweet_url: "https://twitter.com/auguraemal323/status/1806789012345678901".to_string(),
            engagements: Engagements { likes: 34, comments: 8, retweets: 5, views: 1580 },
            timestamp_label: "Jun 30".to_string(),
            is_top: true,
        },
        TopPost {
            author: author("DeFi_Master", "@defi_insights", "photo-1568602471122-7832951cc4c5", false),
            content: "The future of decentralized finance is here! 🚀 Just discovered this amazing protocol that's revolutionizing yield farming. Early adoption is key! #DeFi #Crypto #YieldFarming".to_string(),
            media_url: None,
            tweet_url: "https://twitter.com/defi_insights/status/1805456789012345678".to_string(),
            engagements: Engagements { likes: 23, comments: 7, retweets: 12, views: 945 },
            timestamp_label: "Jun 28".to_string(),
            is_top: false,
        },
        TopPost {
            author: author("BlockchainBuzz", "@blockchain_news", "photo-1494790108755-2616b612b8c6", true),
            content: "Breaking: Major institutional adoption incoming! This could be the catalyst we've all been waiting for. The market is about to shift dramatically. Are you ready? 📈💎".to_string(),
            media_url: Some("https://images.unsplash.com/photo-1721322800607-8c38375eef04?w=400&h=300&fit=crop&auto=format".to_string()),
            tweet_url: "https://twitter.com/blockchain_news/status/1804123456789012345".to_string(),
            engagements: Engagements { likes: 67, comments: 15, retweets: 31, views: 2890 },
            timestamp_label: "Jun 26".to_string(),
            is_top: false,
        },
    ]
}

fn leaderboard() -> Vec<LeaderboardRow> {
    [
        (1, "CryptoKing", 5420.0, "🚀"),
        (2, "BlockchainBoss", 4130.0, "⚡"),
        (3, "DefiMaster", 3890.0, "💎"),
        (4, CURRENT_USERNAME, 2871.70, "🦍"),
        (5, "TokenTrader", 2156.0, "📈"),
    ]
    .into_iter()
    .map(|(rank, username, faps, avatar)| LeaderboardRow {
        rank,
        username: username.to_string(),
        faps,
        avatar: avatar.to_string(),
        is_current_user: username == CURRENT_USERNAME,
    })
    .collect()
}
