/// One rung of the endgame reward ladder: scores up to and including
/// `bound` land here. The ladder is data rather than a formula so each
/// rung can be tuned on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Tier {
    bound: u32,
    template: &'static str,
    asset: &'static str,
}

impl Tier {
    fn reward(&self, score: u32) -> Reward {
        Reward {
            message: self.template.replace("{score}", &score.to_string()),
            asset: self.asset,
        }
    }
}

/// Resolved endgame content for a final score.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reward {
    pub message: String,
    pub asset: &'static str,
}

const EMPTY_HANDED: Tier = Tier {
    bound: 0,
    template: "Not a single word? Time to update that LinkedIn profile...",
    asset: "images/web2.webp",
};

const LEGENDARY: Tier = Tier {
    bound: u32::MAX,
    template: "LEGENDARY! {score} AI terms! You're the next OpenAI! Sam Altman is in your DMs and Elon's getting nervous!",
    asset: "images/elon.gif",
};

/// Ascending by bound; anything above the last rung is legendary.
const TIERS: &[Tier] = &[
    Tier {
        bound: 3,
        template: "{score} disruptions? My grandma's book club talks more AI than that! Time to pivot to a food truck...",
        asset: "images/foodtruck.gif",
    },
    Tier {
        bound: 8,
        template: "{score} AI mentions... Well, at least you're not in crypto anymore!",
        asset: "images/crypto.gif",
    },
    Tier {
        bound: 12,
        template: "{score} disruptions made! You're getting there. The VCs might actually read your pitch deck now.",
        asset: "images/pitchdeck.gif",
    },
    Tier {
        bound: 15,
        template: "{score} AI terms! Success! Your Series A is secured and TechCrunch is calling!",
        asset: "images/techcrunch.gif",
    },
    Tier {
        bound: 20,
        template: "{score} disruptions! You're the next unicorn! Time to practice your \"We're changing the world\" speech!",
        asset: "images/unicorn.gif",
    },
    Tier {
        bound: 25,
        template: "INCREDIBLE! {score} disruptions! Sam Altman just followed you on Twitter! Quick, order that Patagonia vest!",
        asset: "images/vest.gif",
    },
];

/// Maps a final score to its reward. Total over all scores: zero is a
/// dedicated tier regardless of the ladder, every other score takes the
/// first rung whose bound it does not exceed.
pub fn resolve(score: u32) -> Reward {
    if score == 0 {
        return EMPTY_HANDED.reward(0);
    }

    TIERS
        .iter()
        .find(|tier| score <= tier.bound)
        .unwrap_or(&LEGENDARY)
        .reward(score)
}
