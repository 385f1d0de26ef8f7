//! Privacy Policy and Terms of Service as structured data.
//!
//! Section numbers are not part of the text; the renderer derives them from
//! position so inserting a section never leaves stale numbering behind.

pub struct Item {
    pub text: &'static str,
    pub children: &'static [&'static str],
}

const fn li(text: &'static str) -> Item {
    Item { text, children: &[] }
}

const fn li_nested(text: &'static str, children: &'static [&'static str]) -> Item {
    Item { text, children }
}

pub enum Block {
    Para(&'static str),
    List(&'static [Item]),
}

pub struct Subsection {
    pub heading: &'static str,
    pub blocks: &'static [Block],
}

pub struct Section {
    pub heading: &'static str,
    pub blocks: &'static [Block],
    pub subsections: &'static [Subsection],
}

const fn section(heading: &'static str, blocks: &'static [Block]) -> Section {
    Section { heading, blocks, subsections: &[] }
}

pub struct LegalDocument {
    pub title: &'static str,
    pub effective_date: &'static str,
    pub preamble: &'static str,
    pub sections: &'static [Section],
    pub contact_email: &'static str,
}

pub const COMPANY_LINE: &str = "Company: The Black Crest (operating as \"Hynox\")";
pub const WEBSITES: &str = "www.theblackcrest.com / www.hynox.in";
pub const POSTAL_ADDRESS: &str = "123 Marketing St, Tirupur";

impl LegalDocument {
    /// Heading of the closing contact section, numbered after the others.
    pub fn contact_heading(&self) -> String {
        numbered(self.sections.len(), "Contact Us")
    }
}

pub fn numbered(index: usize, heading: &str) -> String {
    format!("{}. {}", index + 1, heading)
}

pub fn sub_numbered(section: usize, sub: usize, heading: &str) -> String {
    format!("{}.{} {}", section + 1, sub + 1, heading)
}

pub static PRIVACY_POLICY: LegalDocument = LegalDocument {
    title: "Privacy Policy",
    effective_date: "March 15, 2024",
    preamble: "Your privacy is important to us. This Privacy Policy explains how The Black Crest, also operating under the name Hynox, collects, uses, shares, and protects your information when you use our website, services, apps, and subscription-based platforms, including our clothing subscription service.",
    contact_email: "privacy@theblackcrest.com",
    sections: &[
        Section {
            heading: "Information We Collect",
            blocks: &[Block::Para("We collect the following categories of information:")],
            subsections: &[
                Subsection {
                    heading: "Personal Information",
                    blocks: &[Block::List(&[
                        li("Name"),
                        li("Email address"),
                        li("Phone number"),
                        li("Billing and shipping address"),
                        li("Account credentials (username, password)"),
                    ])],
                },
                Subsection {
                    heading: "Payment Information",
                    blocks: &[Block::List(&[
                        li("Card or UPI details (processed via secure third-party gateways)"),
                        li("Subscription billing details"),
                    ])],
                },
                Subsection {
                    heading: "Usage Data",
                    blocks: &[Block::List(&[
                        li("IP address, browser type, operating system"),
                        li("Pages visited, time spent, device info"),
                    ])],
                },
                Subsection {
                    heading: "Optional Inputs",
                    blocks: &[Block::List(&[
                        li("Clothing preferences, size, style selections (for fashion subscriptions)"),
                        li("Feedback, survey responses"),
                    ])],
                },
            ],
        },
        section(
            "How We Use Your Data",
            &[
                Block::Para("We use your data to:"),
                Block::List(&[
                    li("Provide services, fulfill product or software orders"),
                    li("Manage subscription plans and send monthly clothing boxes"),
                    li("Respond to customer support and service requests"),
                    li("Send transactional emails, reminders, and promotional offers (you can opt out anytime)"),
                    li("Improve platform features and user experience"),
                ]),
            ],
        ),
        Section {
            heading: "Subscription Service (Clothing Store Policy)",
            blocks: &[Block::Para(
                "If you subscribe to our clothing platform (e.g., Hynox/Teerex), we handle your data as follows:",
            )],
            subsections: &[
                Subsection {
                    heading: "Subscription Management",
                    blocks: &[Block::List(&[
                        li("Your name, size, and shipping info are used to deliver selected products."),
                        li("Subscription auto-renewals will be charged based on your selected plan unless cancelled."),
                    ])],
                },
                Subsection {
                    heading: "Billing & Cancellation",
                    blocks: &[Block::List(&[
                        li("All billing is processed through encrypted payment gateways."),
                        li("You may cancel anytime via your account dashboard before the next billing cycle."),
                        li("No refunds are issued for prepaid plans unless there is a service failure on our side."),
                    ])],
                },
                Subsection {
                    heading: "Communication",
                    blocks: &[Block::List(&[
                        li("We may send reminders, style updates, delivery tracking, or new offers to your registered email/phone."),
                        li("You can manage your communication preferences in your profile settings."),
                    ])],
                },
            ],
        },
        section(
            "How We Share Data",
            &[
                Block::Para("We do not sell or rent your personal information. We may share your data only with:"),
                Block::List(&[
                    li("Trusted third-party service providers (e.g., payment processors, logistics partners)"),
                    li("Government/legal authorities if legally required"),
                    li("Internal tools for business and analytics (with data protection measures)"),
                ]),
            ],
        ),
        section(
            "Data Security",
            &[Block::Para(
                "We implement industry-standard encryption, access controls, and secure hosting practices to protect your data. However, no system is 100% secure, and users should also take steps to protect their passwords and devices.",
            )],
        ),
        section(
            "Cookies & Tracking Technologies",
            &[
                Block::Para("We use cookies and tracking tools to:"),
                Block::List(&[
                    li("Improve website performance"),
                    li("Remember login sessions"),
                    li("Track analytics for better service"),
                ]),
                Block::Para("You can manage cookie settings via your browser."),
            ],
        ),
        section(
            "Your Rights",
            &[
                Block::Para("You have the right to:"),
                Block::List(&[
                    li("Access and review your personal data"),
                    li("Update or correct inaccurate information"),
                    li("Request data deletion (subject to legal or business constraints)"),
                    li("Opt out of marketing communications"),
                ]),
                Block::Para("To exercise these rights, contact: privacy@theblackcrest.com"),
            ],
        ),
        section(
            "Data Retention",
            &[
                Block::Para("We retain your data:"),
                Block::List(&[
                    li("As long as you have an active account or subscription"),
                    li("For legal, accounting, or reporting purposes, where applicable"),
                ]),
            ],
        ),
        section(
            "Changes to Policy",
            &[Block::Para(
                "This Privacy Policy may be updated from time to time. Changes will be posted on this page with a revised effective date.",
            )],
        ),
    ],
};

pub static TERMS_OF_SERVICE: LegalDocument = LegalDocument {
    title: "Terms of Service",
    effective_date: "March 15, 2024",
    preamble: "Welcome to The Black Crest, a registered technology and product development company operating under the brand Hynox. By accessing or using our website, applications, services, subscription platforms, or engaging with our team in any form, you agree to the Terms of Service stated below.",
    contact_email: "info@theblackcrest.com",
    sections: &[
        section(
            "Eligibility and Acceptance",
            &[
                Block::Para("By engaging with The Black Crest in any capacity (as a client, user, subscriber, employee, intern, or freelancer) you confirm that you:"),
                Block::List(&[
                    li("Are at least 18 years old"),
                    li("Have read and agree to be bound by these Terms"),
                    li("Are using the services for lawful purposes"),
                ]),
            ],
        ),
        section(
            "Scope of Services",
            &[
                Block::Para("The Black Crest offers the following services:"),
                Block::List(&[
                    li("Website & Software Development"),
                    li("ERP, CRM, and E-commerce Solutions"),
                    li("UI/UX and SaaS Product Design"),
                    li("Subscription-Based Clothing Platforms"),
                    li("Dropshipping, Fulfillment & Brand Management"),
                    li("Internship, Training & Research Programs"),
                ]),
                Block::Para("We may modify, discontinue, or expand services with or without prior notice."),
            ],
        ),
        Section {
            heading: "Subscription-Based Clothing Service",
            blocks: &[],
            subsections: &[
                Subsection {
                    heading: "Payment & Refunds",
                    blocks: &[Block::List(&[
                        li("Once a subscription plan is activated, all payments are final and non-refundable, even if the user discontinues the service mid-cycle."),
                        li_nested(
                            "Refunds will not be provided for:",
                            &[
                                "Clothing orders that are processed or shipped",
                                "Dropshipping services already initiated",
                                "Subscription boxes or curated styling services",
                            ],
                        ),
                    ])],
                },
                Subsection {
                    heading: "Separate Charges",
                    blocks: &[
                        Block::Para("Your subscription fee does not include the following:"),
                        Block::List(&[
                            li("Shopify platform usage charges"),
                            li("Domain name registration fees"),
                            li("Payment gateway charges or transaction fees"),
                            li("Shipping partner fees (if opted by the client directly)"),
                            li("Any third-party plugin, app, or integration costs"),
                        ]),
                        Block::Para("These charges are billed separately and must be settled directly by the subscriber/client."),
                    ],
                },
                Subsection {
                    heading: "Fulfillment Policy",
                    blocks: &[
                        Block::Para("We promise to handle the complete A-Z process of your clothing store/dropshipping service:"),
                        Block::List(&[
                            li("Product research & listing"),
                            li("Order processing & packaging"),
                            li("Inventory coordination"),
                            li("Dispatch and logistics"),
                        ]),
                        Block::Para("We do not guarantee customer satisfaction with sizing, fit, or delays caused by courier services."),
                    ],
                },
                Subsection {
                    heading: "Subscription Cancellation",
                    blocks: &[Block::List(&[
                        li("Subscriptions can be cancelled anytime through your online dashboard."),
                        li("If you cancel the subscription on or after the 3rd day of your billing cycle, the full month's charge will apply."),
                        li("Cancellation before the 3rd day avoids the next charge, and services will stop at the end of the current cycle."),
                    ])],
                },
            ],
        },
        Section {
            heading: "Employment, Internship & Freelance Policy",
            blocks: &[],
            subsections: &[
                Subsection {
                    heading: "Engagement Requirements",
                    blocks: &[Block::List(&[
                        li("All interns, employees, and freelancers must sign an onboarding agreement and follow project timelines."),
                        li("All official communications must be handled through approved tools (email, company portal, etc.)."),
                    ])],
                },
                Subsection {
                    heading: "Notice Period & Exit Policy",
                    blocks: &[Block::List(&[
                        li("All team members must provide a minimum 30-day notice for resignation or exit."),
                        li_nested(
                            "Failure to follow the notice policy will result in:",
                            &[
                                "Forfeiture of final stipend or salary",
                                "No certificate or letter of experience",
                            ],
                        ),
                    ])],
                },
                Subsection {
                    heading: "Performance-Based Stipends",
                    blocks: &[
                        Block::Para("Stipends are only applicable after:"),
                        Block::List(&[
                            li("Completing training"),
                            li("Meeting performance metrics"),
                            li("Submitting required documentation"),
                        ]),
                        Block::Para("We reserve the right to withhold payment if terms are breached."),
                    ],
                },
            ],
        },
        section(
            "Software Use Policy",
            &[
                Block::Para("All software, code, dashboards, UI/UX designs, and tools created or deployed by The Black Crest remain intellectual property of the company unless contractually transferred."),
                Block::Para("Users are prohibited from:"),
                Block::List(&[
                    li("Reproducing, selling, or redistributing our software"),
                    li("Reverse-engineering or cloning our platforms"),
                    li("Sharing internal dashboards with external users"),
                ]),
                Block::Para("Use is granted as a limited, non-exclusive, non-transferable license for agreed business purposes only."),
            ],
        ),
        section(
            "Project Delivery & Timelines",
            &[Block::List(&[
                li("Client deliverables are shared based on timelines agreed in formal communication or quotation."),
                li("Delays from the client side (content, approval, access, or payment) will automatically shift delivery timelines."),
                li("The company is not liable for delays caused by third-party tools, APIs, server downtimes, or force majeure events."),
            ])],
        ),
        section(
            "Product Returns & Delivery",
            &[Block::List(&[
                li("For product-based services (like clothing), once the item is shipped, returns are accepted only for damaged or incorrect items."),
                li("Sizing and style preferences are not grounds for return unless specifically covered in the subscription plan."),
                li("All return shipping must be handled by the customer unless agreed otherwise."),
            ])],
        ),
        section(
            "Third-Party Services",
            &[
                Block::Para("We use third-party providers for:"),
                Block::List(&[
                    li("Hosting (e.g., AWS, Hostinger)"),
                    li("Payments (e.g., Razorpay, Stripe)"),
                    li("Shipping (e.g., Delhivery, Shiprocket)"),
                    li("E-commerce (e.g., Shopify, WooCommerce)"),
                ]),
                Block::Para("We do not control these services and are not liable for their performance, downtime, or separate billing."),
            ],
        ),
        section(
            "Confidentiality & Data Security",
            &[Block::List(&[
                li("All team members, clients, and users are required to keep project data, designs, and code confidential."),
                li("Any leak, unauthorized use, or replication will result in legal action."),
                li("Data collected is handled as per our Privacy Policy."),
            ])],
        ),
        section(
            "Termination of Services",
            &[
                Block::Para("We reserve the right to suspend or terminate:"),
                Block::List(&[
                    li("Any user, client, or team member who violates these Terms"),
                    li("Projects with non-payment issues"),
                    li("Subscriptions after repeated failed charges or breach of terms"),
                ]),
                Block::Para("No refunds will be issued upon termination due to violations."),
            ],
        ),
        section(
            "Limitation of Liability",
            &[Block::List(&[
                li("We do not guarantee uninterrupted access to services or platforms."),
                li("The Black Crest is not responsible for data loss, business loss, or indirect damages."),
                li("All services are provided \"as is\" and warranties apply only as per individual agreements."),
            ])],
        ),
        section(
            "Updates to Terms",
            &[Block::Para(
                "We may update these Terms occasionally. All changes will be posted on our official websites and become effective immediately upon posting. Continued use of our services constitutes your acceptance of the changes.",
            )],
        ),
        section(
            "Governing Law",
            &[Block::Para(
                "These Terms are governed by the laws of India, with legal jurisdiction based in Coimbatore, Tamil Nadu.",
            )],
        ),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_privacy_policy_numbering() {
        assert_eq!(PRIVACY_POLICY.sections.len(), 9);
        assert_eq!(numbered(0, PRIVACY_POLICY.sections[0].heading), "1. Information We Collect");
        assert_eq!(
            sub_numbered(2, 1, PRIVACY_POLICY.sections[2].subsections[1].heading),
            "3.2 Billing & Cancellation"
        );
        assert_eq!(PRIVACY_POLICY.contact_heading(), "10. Contact Us");
    }

    #[test]
    fn test_terms_numbering() {
        assert_eq!(TERMS_OF_SERVICE.sections.len(), 13);
        assert_eq!(numbered(12, TERMS_OF_SERVICE.sections[12].heading), "13. Governing Law");
        assert_eq!(TERMS_OF_SERVICE.contact_heading(), "14. Contact Us");
    }

    #[test]
    fn test_headings_do_not_carry_their_own_numbers() {
        for doc in [&PRIVACY_POLICY, &TERMS_OF_SERVICE] {
            for section in doc.sections {
                assert!(!section.heading.starts_with(|c: char| c.is_ascii_digit()), "{}", section.heading);
                for sub in section.subsections {
                    assert!(!sub.heading.starts_with(|c: char| c.is_ascii_digit()), "{}", sub.heading);
                }
            }
        }
    }

    #[test]
    fn test_no_empty_sections() {
        for doc in [&PRIVACY_POLICY, &TERMS_OF_SERVICE] {
            for section in doc.sections {
                assert!(
                    !section.blocks.is_empty() || !section.subsections.is_empty(),
                    "{} has no content",
                    section.heading
                );
            }
        }
    }

    #[test]
    fn test_nested_refund_list() {
        let refunds = &TERMS_OF_SERVICE.sections[2].subsections[0];
        let Block::List(items) = &refunds.blocks[0] else {
            panic!("expected a list");
        };
        assert_eq!(items[1].children.len(), 3);
    }
}
