//! Trigger Matcher — canned answers for the most common chat intents.
//!
//! Rules are evaluated in declaration order and the first rule with any
//! matching keyword wins. When nothing matches, the caller falls through to
//! topic classification.

use crate::coach::keywords::NormalizedText;

/// A static (keywords → canned response) pair.
#[derive(Debug, PartialEq, Eq)]
pub struct TriggerRule {
    /// Stable identifier used in logs and the classify endpoint.
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub response: &'static str,
}

pub const TRIGGER_RULES: &[TriggerRule] = &[
    TriggerRule {
        name: "greeting",
        keywords: &[
            "hello",
            "greetings",
            "good morning",
            "good afternoon",
            "good evening",
            "howdy",
        ],
        response: "Hello! I'm your career coach. I can help with resumes, interview \
            preparation, salary negotiation, career changes, and industry-specific advice. \
            What are you working on right now?",
    },
    TriggerRule {
        name: "gratitude",
        keywords: &["thank", "appreciate it"],
        response: "You're welcome! Career growth is a marathon, not a sprint. \
            Come back any time you want to talk through your next step.",
    },
    TriggerRule {
        name: "resume",
        keywords: &["resume", "résumé", "curriculum vitae"],
        response: "**Resume essentials**\n\n\
            1. Lead every bullet with a strong action verb and end it with a measurable result.\n\
            2. Tailor the top third of the page to the role: mirror the job description's key terms.\n\
            3. Keep it to one page for under ten years of experience, two pages at most beyond that.\n\
            4. Use a clean single-column layout so applicant tracking systems can parse it.\n\
            5. Cut duties nobody asked about; keep achievements that prove you can do the target job.",
    },
    TriggerRule {
        name: "cover_letter",
        keywords: &["cover letter"],
        response: "**Writing a cover letter that gets read**\n\n\
            - Open with why this company and this role, not with your name.\n\
            - Pick two achievements that map directly to their biggest needs.\n\
            - Show you understand their product, customers, or challenges.\n\
            - Keep it under 300 words and close with a clear ask for a conversation.",
    },
    TriggerRule {
        name: "interview",
        keywords: &["interview"],
        response: "**Interview preparation**\n\n\
            1. Research the company's products, recent news, and the team you'd join.\n\
            2. Prepare five or six STAR stories (Situation, Task, Action, Result) you can adapt.\n\
            3. Practice out loud: time your answers to stay under two minutes.\n\
            4. Prepare thoughtful questions about the team's goals and how success is measured.\n\
            5. Send a short thank-you note within 24 hours that references something specific.",
    },
    TriggerRule {
        name: "salary_negotiation",
        keywords: &[
            "salary",
            "negotiat",
            "pay raise",
            "compensation",
            "counteroffer",
            "counter offer",
        ],
        response: "**Negotiating compensation**\n\n\
            - Research market ranges for the role, level, and location before any conversation.\n\
            - Let the employer name a number first when you can; anchor high when you can't.\n\
            - Negotiate the whole package: base, bonus, equity, start date, remote flexibility, learning budget.\n\
            - Justify your ask with impact you've delivered, not with personal expenses.\n\
            - Get the final offer in writing before resigning anywhere.",
    },
    TriggerRule {
        name: "career_change",
        keywords: &[
            "career change",
            "change careers",
            "switch careers",
            "switching careers",
            "pivot",
            "transition",
        ],
        response: "**Changing careers**\n\n\
            1. Map your transferable skills to the new field's job descriptions.\n\
            2. Close the biggest gap first with a focused course, certification, or portfolio project.\n\
            3. Talk to five people already doing the job before committing.\n\
            4. Look for bridge roles that combine your current expertise with the new field.\n\
            5. Rewrite your story so the change reads as a deliberate next step, not an escape.",
    },
    TriggerRule {
        name: "networking",
        keywords: &["networking", "linkedin", "referral", "mentor"],
        response: "**Building a professional network**\n\n\
            - Keep your LinkedIn headline specific: the role you want and the value you bring.\n\
            - Reach out with short, specific messages; ask for advice, not for a job.\n\
            - Give before you ask: share useful articles, introductions, or feedback.\n\
            - Attend one industry meetup or online community event per month.\n\
            - Referrals convert far better than cold applications, so nurture relationships early.",
    },
    TriggerRule {
        name: "job_search",
        keywords: &[
            "job search",
            "job hunt",
            "find a job",
            "finding a job",
            "applying",
            "applications",
            "unemployed",
            "laid off",
        ],
        response: "**Running an effective job search**\n\n\
            1. Define a target list of 20 to 30 companies instead of applying everywhere.\n\
            2. Tailor each application; quality beats volume.\n\
            3. Track every application, contact, and follow-up in one place.\n\
            4. Spend at least half your time on networking and referrals.\n\
            5. Protect your energy with a weekly routine and small daily goals.",
    },
    TriggerRule {
        name: "burnout",
        keywords: &[
            "burnout",
            "burned out",
            "burnt out",
            "stressed",
            "overwhelmed",
            "motivat",
            "rejection",
            "rejected",
            "imposter",
        ],
        response: "Career setbacks are hard, and feeling this way is more common than you think.\n\n\
            - Separate your worth from any single outcome; rejections are usually about fit and timing.\n\
            - Break big goals into small, winnable steps for this week.\n\
            - Write down three things you've done well recently.\n\
            - Talk to someone you trust, and take real breaks.\n\
            If stress is affecting your health, please reach out to a professional for support.",
    },
    TriggerRule {
        name: "promotion",
        keywords: &["promotion", "promoted"],
        response: "**Earning a promotion**\n\n\
            - Ask your manager what the next level looks like and what evidence they need.\n\
            - Start doing parts of the next-level job now and make that work visible.\n\
            - Keep a running log of wins with measurable outcomes.\n\
            - Find a sponsor who will advocate for you in calibration discussions.",
    },
    TriggerRule {
        name: "remote_work",
        keywords: &["remote", "work from home", "hybrid"],
        response: "**Thriving in remote and hybrid roles**\n\n\
            - Over-communicate progress in writing; visibility doesn't happen by accident.\n\
            - Set clear working hours and a dedicated workspace.\n\
            - Schedule regular one-on-ones and informal chats with teammates.\n\
            - Highlight async collaboration tools and self-management on your resume.",
    },
];

/// Returns the first rule with a keyword present in `text`.
pub fn match_trigger(text: &NormalizedText) -> Option<&'static TriggerRule> {
    TRIGGER_RULES
        .iter()
        .find(|rule| text.mentions_any(rule.keywords))
}
