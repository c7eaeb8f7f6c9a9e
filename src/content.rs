use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Cedi,
    Bell,
    TrendingUp,
    Shield,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Cedi => "₵",
            Icon::Bell => "🔔",
            Icon::TrendingUp => "📈",
            Icon::Shield => "🛡️",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Icon::Cedi | Icon::TrendingUp => "card-icon primary",
            Icon::Bell | Icon::Shield => "card-icon accent",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Card {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub static FEATURES: [Card; 4] = [
    Card {
        icon: Icon::Cedi,
        title: "Track Multiple Debtors",
        description: "Keep all your debt records in one organized place",
    },
    Card {
        icon: Icon::Bell,
        title: "Get Reminders",
        description: "Never forget when payments are due",
    },
    Card {
        icon: Icon::TrendingUp,
        title: "Simple to Use",
        description: "Intuitive interface that anyone can master",
    },
    Card {
        icon: Icon::Shield,
        title: "Secure & Private",
        description: "Your financial data is always protected",
    },
];

pub static SERVICES: [Card; 4] = [
    Card {
        icon: Icon::Cedi,
        title: "Track Debts",
        description: "Keep all debt records in one place with detailed information and status tracking.",
    },
    Card {
        icon: Icon::Bell,
        title: "Set Payment Reminders",
        description: "Never forget when payments are due with smart notification systems.",
    },
    Card {
        icon: Icon::TrendingUp,
        title: "Generate Reports",
        description: "See who owes what instantly with comprehensive reporting and analytics.",
    },
    Card {
        icon: Icon::Shield,
        title: "Simple & Secure",
        description: "Your data is safe with us using enterprise-grade security measures.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DebtStatus {
    Paid,
    Pending,
    DueToday,
}

impl DebtStatus {
    pub fn label(self) -> &'static str {
        match self {
            DebtStatus::Paid => "Paid",
            DebtStatus::Pending => "Pending",
            DebtStatus::DueToday => "Due Today",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            DebtStatus::Paid => "paid",
            DebtStatus::Pending => "pending",
            DebtStatus::DueToday => "due",
        }
    }
}

/// A sample row in the hero's app mockup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DebtEntry {
    pub debtor: &'static str,
    pub note: &'static str,
    pub amount: u32,
    pub status: DebtStatus,
}

pub static RECENT_DEBTS: [DebtEntry; 3] = [
    DebtEntry {
        debtor: "John Doe",
        note: "Lunch payment",
        amount: 200,
        status: DebtStatus::Paid,
    },
    DebtEntry {
        debtor: "Sarah Smith",
        note: "Movie tickets",
        amount: 45,
        status: DebtStatus::Pending,
    },
    DebtEntry {
        debtor: "Mike Johnson",
        note: "Coffee run",
        amount: 12,
        status: DebtStatus::DueToday,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub glyph: &'static str,
}

pub static SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        label: "LinkedIn",
        href: config::LINKEDIN_URL,
        glyph: "in",
    },
    SocialLink {
        label: "X",
        href: config::X_URL,
        glyph: "𝕏",
    },
    SocialLink {
        label: "Email",
        href: config::CONTACT_MAILTO,
        glyph: "✉",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_titles_are_unique() {
        for cards in [&FEATURES, &SERVICES] {
            for (i, a) in cards.iter().enumerate() {
                assert!(cards.iter().skip(i + 1).all(|b| b.title != a.title));
            }
        }
    }

    #[test]
    fn recent_debts_show_each_status_once() {
        for status in [DebtStatus::Paid, DebtStatus::Pending, DebtStatus::DueToday] {
            assert_eq!(RECENT_DEBTS.iter().filter(|d| d.status == status).count(), 1);
        }
        assert!(RECENT_DEBTS.iter().all(|d| d.amount > 0));
    }

    #[test]
    fn email_link_points_at_contact_address() {
        let email = SOCIAL_LINKS.iter().find(|l| l.label == "Email").unwrap();
        assert_eq!(email.href, format!("mailto:{}", config::CONTACT_EMAIL));
    }
}
