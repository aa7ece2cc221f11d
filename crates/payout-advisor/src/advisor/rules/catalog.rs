use super::super::domain::{AnswerSet, FundsFlow, IntegrationFamily, Recommendation, RuleId};

const GLOBAL_PAYOUTS_DOCS: &str = "https://docs.stripe.com/global-payouts";
const CONNECT_DOCS: &str = "https://docs.stripe.com/connect/cross-border-payouts";

/// Static text for one recommendation variant.
struct VariantTemplate {
    integration: IntegrationFamily,
    flow: Option<FundsFlow>,
    title: &'static str,
    description: &'static str,
    benefits: Vec<&'static str>,
    use_cases: Vec<&'static str>,
    docs_link: &'static str,
    implementation_note: Option<&'static str>,
}

impl VariantTemplate {
    fn into_recommendation(self, rule: RuleId) -> Recommendation {
        Recommendation {
            rule,
            integration: self.integration,
            flow: self.flow,
            title: self.title.to_string(),
            description: self.description.to_string(),
            benefits: self.benefits.into_iter().map(str::to_string).collect(),
            use_cases: self.use_cases.into_iter().map(str::to_string).collect(),
            docs_link: Some(self.docs_link.to_string()),
            implementation_note: self.implementation_note.map(str::to_string),
        }
    }
}

pub(crate) fn direct_international_fast(_: &AnswerSet) -> Recommendation {
    VariantTemplate {
        integration: IntegrationFamily::GlobalPayouts,
        flow: Some(FundsFlow::DirectPayout),
        title: "Global Payouts with Direct Integration",
        description:
            "Direct payouts from your account to international recipients with fast implementation.",
        benefits: vec![
            "Pay out from your own business account",
            "International payout support",
            "Fast integration and time-to-market",
            "You are the Merchant of Record",
            "Full control over payout flow",
        ],
        use_cases: vec![
            "Global B2C platforms paying out funds to users",
            "International marketplaces with fast integration requirements",
            "Businesses managing global fund distribution",
        ],
        docs_link: GLOBAL_PAYOUTS_DOCS,
        implementation_note: None,
    }
    .into_recommendation(RuleId::DirectInternationalFast)
}

pub(crate) fn direct_domestic_fast(_: &AnswerSet) -> Recommendation {
    VariantTemplate {
        integration: IntegrationFamily::GlobalPayouts,
        flow: Some(FundsFlow::DirectPayout),
        title: "Global Payouts",
        description: "Direct payouts from your account to recipients with fast integration.",
        benefits: vec![
            "Pay out from your own business account",
            "Domestic payout support",
            "Quick implementation and deployment",
            "Full control over payout flow",
            "Real-time payout tracking",
        ],
        use_cases: vec![
            "B2C platforms paying out funds to users",
            "Domestic marketplaces with fast integration requirements",
            "Businesses with simple payout workflows",
        ],
        docs_link: GLOBAL_PAYOUTS_DOCS,
        implementation_note: None,
    }
    .into_recommendation(RuleId::DirectDomesticFast)
}

pub(crate) fn platform_merchant_of_record(_: &AnswerSet) -> Recommendation {
    VariantTemplate {
        integration: IntegrationFamily::Connect,
        flow: Some(FundsFlow::DestinationCharges),
        title: "Connect with Destination Charges or Separate Charges and Transfers",
        description:
            "Stay out of the flow of funds while managing merchant relationships as Merchant of Record.",
        benefits: vec![
            "Direct fund flow from payer to connected accounts",
            "You remain Merchant of Record",
            "Reduced operational complexity",
            "Built-in Stripe account management",
            "Flexible charge and transfer patterns",
        ],
        use_cases: vec![
            "Marketplaces connecting buyers and sellers",
            "Platforms managing merchant relationships",
            "SaaS platforms with split payments",
        ],
        docs_link: CONNECT_DOCS,
        implementation_note: Some(
            "Use Destination Charges or Separate Charges and Transfers without on_behalf_of to remain as the Merchant of Record.",
        ),
    }
    .into_recommendation(RuleId::PlatformMerchantOfRecord)
}

pub(crate) fn connected_merchant_of_record(_: &AnswerSet) -> Recommendation {
    VariantTemplate {
        integration: IntegrationFamily::Connect,
        flow: Some(FundsFlow::DirectCharges),
        title: "Connect with Direct Charges or Destination On-Behalf-Of",
        description: "Enable direct payments while connected accounts act as Merchant of Record.",
        benefits: vec![
            "Connected accounts are Merchant of Record",
            "You stay out of the fund flow",
            "Reduced compliance burden for platform",
            "Built-in account and payout management",
            "Lower operational complexity",
        ],
        use_cases: vec![
            "Gig economy and freelance platforms",
            "P2P payment networks",
            "Platforms where sellers manage customer relationships",
        ],
        docs_link: CONNECT_DOCS,
        implementation_note: None,
    }
    .into_recommendation(RuleId::ConnectedMerchantOfRecord)
}

/// The international answer only changes one benefit line, never the integration.
pub(crate) fn general_global_payouts(answers: &AnswerSet) -> Recommendation {
    let reach = if answers.international_payouts == Some(true) {
        "International payout support"
    } else {
        "Domestic payout support"
    };

    VariantTemplate {
        integration: IntegrationFamily::GlobalPayouts,
        flow: None,
        title: "Global Payouts",
        description:
            "Direct payouts from your account to recipients with flexible implementation.",
        benefits: vec![
            "Pay out from your own business account",
            "Comprehensive payout management",
            reach,
            "Flexible implementation timeline",
            "Real-time payout tracking",
        ],
        use_cases: vec![
            "B2C platforms with standard integration timelines",
            "Marketplaces handling user payouts",
            "Payroll and distribution systems",
        ],
        docs_link: GLOBAL_PAYOUTS_DOCS,
        implementation_note: None,
    }
    .into_recommendation(RuleId::GeneralGlobalPayouts)
}

pub(crate) fn general_connect(_: &AnswerSet) -> Recommendation {
    VariantTemplate {
        integration: IntegrationFamily::Connect,
        flow: None,
        title: "Stripe Connect",
        description:
            "Enable payments between your users while managing the fund flow architecture.",
        benefits: vec![
            "Simplified platform architecture",
            "User-to-user payment support",
            "Built-in account management",
            "Compliance handled by Stripe",
        ],
        use_cases: vec![
            "Multi-user payment platforms",
            "Collaboration and split payment scenarios",
            "Distributed marketplace models",
        ],
        docs_link: CONNECT_DOCS,
        implementation_note: None,
    }
    .into_recommendation(RuleId::GeneralConnect)
}

pub(crate) fn fallback(_: &AnswerSet) -> Recommendation {
    VariantTemplate {
        integration: IntegrationFamily::GlobalPayouts,
        flow: None,
        title: "Global Payouts",
        description: "The recommended solution for your use case.",
        benefits: vec![
            "Direct payout capabilities",
            "Comprehensive payout management",
            "Proven at scale",
        ],
        use_cases: vec!["Fund distribution", "Marketplace payouts"],
        docs_link: GLOBAL_PAYOUTS_DOCS,
        implementation_note: None,
    }
    .into_recommendation(RuleId::Fallback)
}
