//! The fixed sales script — every line the agent can say.
//!
//! All of Ananya's material lives here as static tables: opening lines,
//! objection rebuttals with their follow-up clauses, fallback prompts, and
//! the quick-prompt suggestions the frontend offers.

pub const AGENT_NAME: &str = "Ananya from MilkyWay Fresh";

pub const OPENING_LINES: &[&str] = &[
    "Good morning! Ananya here from MilkyWay Fresh. Did I catch you at a convenient moment?",
    "Hi there! This is Ananya with MilkyWay Fresh dairy. May I take sixty seconds to share why thousands of families trust us every morning?",
    "Namaste! You're speaking with Ananya from MilkyWay Fresh. I'd love to quickly show how we make your milk runs effortless.",
];

pub const QUICK_FACTS: &[&str] = &[
    "100% pure A2-certified farm milk",
    "Sunrise doorstep delivery, even on Sundays",
    "Tested for antibiotics and adulteration thrice daily",
    "Flexible pause and resume through WhatsApp",
];

pub const FOLLOW_UP_PROMPTS: &[&str] = &[
    "What's the current milk source in your home?",
    "Do you prefer toned, full cream, or something specialised like lactose-free?",
    "Any little ones or elders at home whose nutrition is top priority?",
];

pub const CLOSING_PITCH: &str = "Let's get you started with our bestseller — 2 liters of A2 cow milk and probiotic curd for just ₹299 on a no-strings 3-day trial. I can reserve a morning delivery slot right now. Should I go ahead?";

pub const CLARIFICATION: &str =
    "I didn't quite catch that. Could you repeat what you'd like to know about MilkyWay Fresh?";

pub const SOFT_DECLINE: &str = "I hear you. Since quality dairy is a daily decision, I'll WhatsApp you a one-pager. If freshness becomes a priority, just reply 'MILK' and I'll personally assist.";

pub const BOOKING_CONFIRMATION: &str = "Fantastic! I'll book the 3-day starter hamper and share payment options via WhatsApp in two minutes. Expect your first crate tomorrow before sunrise. Welcome to the MilkyWay Fresh family!";

// ── Objection rebuttals ──
//
// Each rebuttal is the scripted block plus a fixed follow-up clause, joined
// with a blank line when the selector fires.

pub const PRICE_REBUTTAL: &str = "I understand price matters. Remember, you're getting single-origin A2 milk, chilled within 30 minutes of milking. Most customers happily switch because the freshness is unmistakable and we include the glass bottle deposit.";
pub const PRICE_FOLLOW_UP: &str = "We start at ₹89 per liter with weekly subscription rewards that bring it effectively down to ₹82. Trial deliveries are complimentary.";

pub const DELIVERY_REBUTTAL: &str = "Delivery is our biggest strength. We assign you a dedicated rider, share live delivery confirmation, and offer a 5:30–7:00 AM delivery window that we hit 98.6% of the time.";
pub const DELIVERY_FOLLOW_UP: &str =
    "Would you prefer a 5:30 AM or 6:15 AM drop slot? I can lock it in.";

pub const TASTE_REBUTTAL: &str = "Taste seals the deal for most families. Because the herd is grass-fed and the milk is never recombined, you get natural sweetness. Plus, our first delivery is a tasting hamper on the house.";
pub const TASTE_FOLLOW_UP: &str = "In fact, our sommelier-style tasting notes: hint of sweetness, creamy mouthfeel, zero aftertaste.";

pub const TRIAL_REBUTTAL: &str = "Absolutely. I can book a 3-day trial combo with full credit if you convert. Shall I reserve the first crate for tomorrow morning?";
pub const TRIAL_FOLLOW_UP: &str = "I'll arrange a welcome call from our nutritionist as well.";

pub const BUSY_REBUTTAL: &str = "No problem, I respect your time. Let me highlight the essentials in 30 seconds: pure A2 milk, temperature-controlled delivery, and zero-questions-asked replacement. Would it help if I WhatsApp a quick summary and call back at your preferred slot?";
pub const BUSY_FOLLOW_UP: &str = "Let me know a better time and I'll make sure to ring you then.";

// ── Keyword groups ──
//
// Checked in this exact order; the first group with a hit wins.

pub const PRICE_KEYWORDS: &[&str] = &["price", "pricing", "cost", "rupee", "rs", "₹"];
pub const DELIVERY_KEYWORDS: &[&str] = &["delivery", "late", "timing", "logistics"];
pub const TASTE_KEYWORDS: &[&str] = &["taste", "flavor", "quality"];
pub const TRIAL_KEYWORDS: &[&str] = &["trial", "sample", "test"];
pub const BUSY_KEYWORDS: &[&str] = &["busy", "later", "not now", "call back"];
pub const DECLINE_KEYWORDS: &[&str] = &["no", "not interested"];
pub const AFFIRMATIVE_KEYWORDS: &[&str] = &["yes", "okay", "sure", "go ahead"];

// ── Quick prompts (frontend suggestion buttons) ──

/// (label, prompt text). Selecting one pre-fills the input; it is never
/// auto-submitted.
pub const QUICK_PROMPTS: &[(&str, &str)] = &[
    (
        "Tell me about your milk",
        "Give me a sharp elevator pitch about the milk quality and delivery.",
    ),
    ("What's the pricing?", "Break down your pricing and trial options."),
    (
        "Handle delivery concerns",
        "I'm worried about delivery reliability.",
    ),
    ("Convince me fast", "Give me your fastest convincing pitch."),
];
