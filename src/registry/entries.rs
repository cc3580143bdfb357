//! Built-in documentation entries
//!
//! One entry per documented component, keyed by slug. Components without a
//! page yet (see `components.rs`) have no entry here.

use std::collections::HashMap;

use crate::models::preview::{
    AccordionMode, AccordionPreview, AccordionSection, AlertPreview, AlertVariant, BadgePreview,
    BadgeVariant, BreadcrumbPreview, ButtonPreview, ButtonVariant, CardPreview, CardVariant,
    CheckboxPreview, ChoiceOption, Crumb, InputPreview, RadioGroupPreview, SelectPreview, Size,
    TablePreview, TextAreaPreview,
};
use crate::models::{CatalogueEntry, PreviewElement, PropDef, VariantPreview};

/// All built-in entries keyed by component slug
pub fn builtin_entries() -> HashMap<String, CatalogueEntry> {
    let entries = [
        ("button", button_entry()),
        ("input", input_entry()),
        ("select", select_entry()),
        ("checkbox", checkbox_entry()),
        ("radio", radio_entry()),
        ("textarea", textarea_entry()),
        ("alert", alert_entry()),
        ("card", card_entry()),
        ("badge", badge_entry()),
        ("table", table_entry()),
        ("breadcrumb", breadcrumb_entry()),
        ("accordion", accordion_entry()),
    ];

    entries
        .into_iter()
        .map(|(slug, entry)| (slug.to_string(), entry))
        .collect()
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn button(label: &str, variant: ButtonVariant, size: Size) -> PreviewElement {
    PreviewElement::Button(ButtonPreview {
        label: label.into(),
        variant,
        size,
        ..Default::default()
    })
}

fn input(label: &str, placeholder: Option<&str>, size: Size) -> InputPreview {
    InputPreview {
        label: label.into(),
        placeholder: placeholder.map(Into::into),
        size,
        ..Default::default()
    }
}

fn state_options() -> Vec<ChoiceOption> {
    vec![
        ChoiceOption::new("va", "Virginia"),
        ChoiceOption::new("md", "Maryland"),
        ChoiceOption::new("dc", "District of Columbia"),
    ]
}

fn alert(variant: AlertVariant, title: &str, body: &str) -> PreviewElement {
    PreviewElement::Alert(AlertPreview {
        variant,
        title: Some(title.into()),
        body: body.into(),
        dismissible: false,
    })
}

fn badge(label: &str, variant: BadgeVariant, size: Size) -> PreviewElement {
    PreviewElement::Badge(BadgePreview {
        label: label.into(),
        variant,
        size,
    })
}

fn section(title: &str, body: &str, open: bool) -> AccordionSection {
    AccordionSection {
        title: title.into(),
        body: body.into(),
        open,
    }
}

fn button_entry() -> CatalogueEntry {
    use ButtonVariant::*;

    CatalogueEntry {
        default_preview: vec![
            button("Primary Button", Primary, Size::Md),
            button("Secondary", Secondary, Size::Md),
            button("Outline", Outline, Size::Md),
            button("Ghost", Ghost, Size::Md),
            button("Destructive", Destructive, Size::Md),
        ]
        .into(),
        default_code: r#"<Button>Primary Button</Button>
<Button variant="secondary">Secondary</Button>
<Button variant="outline">Outline</Button>
<Button variant="ghost">Ghost</Button>
<Button variant="destructive">Destructive</Button>"#
            .into(),
        variants: vec![
            VariantPreview::new(
                "Sizes",
                vec![
                    button("Small", Primary, Size::Sm),
                    button("Medium", Primary, Size::Md),
                    button("Large", Primary, Size::Lg),
                ],
                r#"<Button size="sm">Small</Button>
<Button size="md">Medium</Button>
<Button size="lg">Large</Button>"#,
            ),
            VariantPreview::new(
                "States",
                vec![
                    PreviewElement::Button(ButtonPreview {
                        label: "Disabled".into(),
                        disabled: true,
                        ..Default::default()
                    }),
                    PreviewElement::Button(ButtonPreview {
                        label: "Loading".into(),
                        loading: true,
                        ..Default::default()
                    }),
                ],
                "<Button disabled>Disabled</Button>\n<Button loading>Loading</Button>",
            ),
        ],
        prop_definitions: vec![
            PropDef::new(
                "variant",
                "'primary' | 'secondary' | 'outline' | 'ghost' | 'destructive'",
                "Visual style variant",
            )
            .default_value("'primary'"),
            PropDef::new("size", "'sm' | 'md' | 'lg'", "Button size").default_value("'md'"),
            PropDef::new(
                "loading",
                "boolean",
                "Shows loading spinner and disables interaction",
            )
            .default_value("false"),
            PropDef::new("disabled", "boolean", "Disables the button").default_value("false"),
            PropDef::new("className", "string", "Additional CSS classes"),
            PropDef::new("children", "ReactNode", "Button content").required(),
        ],
        accessibility: lines(&[
            "Uses native <button> element for built-in keyboard and screen reader support",
            "Disabled state uses aria-disabled for screen reader announcement",
            "Loading state announces \"Loading\" to screen readers via aria-label",
            "Focus ring visible on keyboard navigation (focus-visible)",
            "Meets WCAG 2.1 AA contrast requirements in all variants",
        ]),
        dos: lines(&[
            "Use clear, action-oriented labels (\"Submit application\", \"Save changes\")",
            "Use primary variant for the main action on a page",
            "Use destructive variant only for irreversible actions",
            "Provide loading state feedback for async actions",
        ]),
        donts: lines(&[
            "Don't use multiple primary buttons in the same section",
            "Don't use vague labels like \"Click here\" or \"Submit\"",
            "Don't disable buttons without explaining why",
            "Don't use ghost variant for primary actions",
        ]),
        usage_code: Some(
            r#"// Basic usage
<Button onClick={handleSubmit}>Submit Application</Button>

// With loading state
<Button loading={isSubmitting}>
  {isSubmitting ? 'Submitting...' : 'Submit'}
</Button>

// Destructive action
<Button variant="destructive" onClick={handleDelete}>
  Delete Account
</Button>"#
                .into(),
        ),
    }
}

fn input_entry() -> CatalogueEntry {
    CatalogueEntry {
        default_preview: vec![
            PreviewElement::Input(input("Full Name", Some("Enter your name"), Size::Md)),
            PreviewElement::Input(InputPreview {
                input_type: Some("email".into()),
                helper_text: Some("We'll never share your email.".into()),
                ..input("Email", Some("name@example.com"), Size::Md)
            }),
        ]
        .into(),
        default_code: r#"<Input label="Full Name" placeholder="Enter your name" />
<Input label="Email" type="email" placeholder="name@example.com"
  helperText="We'll never share your email." />"#
            .into(),
        variants: vec![
            VariantPreview::new(
                "Error State",
                vec![PreviewElement::Input(InputPreview {
                    input_type: Some("email".into()),
                    error: Some("Please enter a valid email address".into()),
                    value: Some("invalid-email".into()),
                    ..input("Email", None, Size::Md)
                })],
                r#"<Input label="Email" type="email"
  error="Please enter a valid email address"
  defaultValue="invalid-email" />"#,
            ),
            VariantPreview::new(
                "Sizes",
                vec![
                    PreviewElement::Input(input("Small", Some("Small input"), Size::Sm)),
                    PreviewElement::Input(input("Medium", Some("Medium input"), Size::Md)),
                    PreviewElement::Input(input("Large", Some("Large input"), Size::Lg)),
                ],
                r#"<Input label="Small" size="sm" placeholder="Small input" />
<Input label="Medium" size="md" placeholder="Medium input" />
<Input label="Large" size="lg" placeholder="Large input" />"#,
            ),
        ],
        prop_definitions: vec![
            PropDef::new("label", "string", "Input label text"),
            PropDef::new("helperText", "string", "Helper text below the input"),
            PropDef::new("error", "string", "Error message (also sets error styling)"),
            PropDef::new("size", "'sm' | 'md' | 'lg'", "Input size").default_value("'md'"),
            PropDef::new("disabled", "boolean", "Disables the input").default_value("false"),
        ],
        accessibility: lines(&[
            "Label is properly associated with input via htmlFor/id",
            "Error messages linked via aria-describedby",
            "aria-invalid set when error prop is provided",
            "Helper text linked via aria-describedby",
            "Focus ring visible on keyboard navigation",
        ]),
        dos: lines(&[
            "Always provide a visible label",
            "Use helper text for format requirements",
            "Show inline error messages near the field",
        ]),
        donts: lines(&[
            "Don't use placeholder text as a label replacement",
            "Don't show errors before the user interacts with the field",
            "Don't use red for non-error states",
        ]),
        usage_code: Some(
            r#"<Input
  label="Social Security Number"
  type="text"
  placeholder="XXX-XX-XXXX"
  helperText="Required for benefit applications"
  error={errors.ssn}
/>"#
                .into(),
        ),
    }
}

fn select_entry() -> CatalogueEntry {
    CatalogueEntry {
        default_preview: vec![PreviewElement::Select(SelectPreview {
            label: "State".into(),
            placeholder: Some("Select a state".into()),
            options: state_options(),
            error: None,
        })]
        .into(),
        default_code: r#"<Select
  label="State"
  placeholder="Select a state"
  options={[
    { value: 'va', label: 'Virginia' },
    { value: 'md', label: 'Maryland' },
    { value: 'dc', label: 'District of Columbia' },
  ]}
/>"#
        .into(),
        variants: vec![VariantPreview::new(
            "Error State",
            vec![PreviewElement::Select(SelectPreview {
                label: "County".into(),
                placeholder: Some("Select a county".into()),
                options: Vec::new(),
                error: Some("County is required".into()),
            })],
            r#"<Select label="County" placeholder="Select a county"
  options={[]} error="County is required" />"#,
        )],
        prop_definitions: vec![
            PropDef::new("label", "string", "Select label text"),
            PropDef::new("options", "{ value: string, label: string }[]", "Array of options")
                .required(),
            PropDef::new("placeholder", "string", "Placeholder option text"),
            PropDef::new("helperText", "string", "Helper text below the select"),
            PropDef::new("error", "string", "Error message"),
            PropDef::new("size", "'sm' | 'md' | 'lg'", "Select size").default_value("'md'"),
            PropDef::new("disabled", "boolean", "Disables the select").default_value("false"),
        ],
        accessibility: lines(&[
            "Uses native <select> element for full keyboard and screen reader support",
            "Label properly associated via htmlFor/id",
            "Error messages linked via aria-describedby",
        ]),
        dos: lines(&[
            "Provide a clear placeholder option",
            "Keep option lists reasonable (under 15 items)",
            "Sort options logically (alphabetical or by frequency)",
        ]),
        donts: lines(&[
            "Don't use a select for fewer than 3 options (use radio instead)",
            "Don't use for very long lists (use a combobox/autocomplete)",
        ]),
        usage_code: None,
    }
}

fn checkbox_entry() -> CatalogueEntry {
    CatalogueEntry {
        default_preview: vec![
            PreviewElement::Checkbox(CheckboxPreview {
                label: "I agree to the terms and conditions".into(),
                ..Default::default()
            }),
            PreviewElement::Checkbox(CheckboxPreview {
                label: "Subscribe to newsletter".into(),
                description: Some("Get monthly updates about Virginia services".into()),
                ..Default::default()
            }),
        ]
        .into(),
        default_code: r#"<Checkbox label="I agree to the terms and conditions" />
<Checkbox label="Subscribe to newsletter"
  description="Get monthly updates about Virginia services" />"#
            .into(),
        variants: Vec::new(),
        prop_definitions: vec![
            PropDef::new("label", "string", "Checkbox label").required(),
            PropDef::new("description", "string", "Additional description below the label"),
            PropDef::new("checked", "boolean", "Controlled checked state"),
            PropDef::new("onChange", "(checked: boolean) => void", "Change handler"),
            PropDef::new("disabled", "boolean", "Disables the checkbox").default_value("false"),
            PropDef::new("error", "string", "Error message"),
        ],
        accessibility: lines(&[
            "Uses native <input type=\"checkbox\"> for built-in support",
            "Label properly associated for click-to-toggle",
            "Focus ring visible on keyboard navigation",
            "Checked state announced by screen readers",
        ]),
        dos: lines(&[
            "Use for multiple selections from a list",
            "Write labels as positive statements",
            "Group related checkboxes with a fieldset and legend",
        ]),
        donts: lines(&[
            "Don't use for mutually exclusive options (use radio)",
            "Don't use negative phrasing (\"Don't send emails\")",
        ]),
        usage_code: None,
    }
}

fn radio_entry() -> CatalogueEntry {
    CatalogueEntry {
        default_preview: vec![PreviewElement::RadioGroup(RadioGroupPreview {
            name: "contact-method".into(),
            label: Some("Preferred contact method".into()),
            options: vec![
                ChoiceOption::new("email", "Email"),
                ChoiceOption::new("phone", "Phone")
                    .with_description("We'll call during business hours"),
                ChoiceOption::new("mail", "Mail"),
            ],
            selected: None,
        })]
        .into(),
        default_code: r#"<RadioGroup
  name="contact-method"
  label="Preferred contact method"
  options={[
    { value: 'email', label: 'Email' },
    { value: 'phone', label: 'Phone',
      description: "We'll call during business hours" },
    { value: 'mail', label: 'Mail' },
  ]}
/>"#
        .into(),
        variants: Vec::new(),
        prop_definitions: vec![
            PropDef::new("name", "string", "Form field name").required(),
            PropDef::new("label", "string", "Group label"),
            PropDef::new(
                "options",
                "{ value: string, label: string, description?: string }[]",
                "Radio options",
            )
            .required(),
            PropDef::new("value", "string", "Controlled selected value"),
            PropDef::new("onChange", "(value: string) => void", "Change handler"),
            PropDef::new("disabled", "boolean", "Disables all options").default_value("false"),
            PropDef::new("error", "string", "Error message"),
        ],
        accessibility: lines(&[
            "Uses native <input type=\"radio\"> within a <fieldset>",
            "Group label provided via <legend>",
            "Arrow keys navigate between options",
            "Error messages linked via aria-describedby",
        ]),
        dos: lines(&[
            "Use for mutually exclusive choices",
            "Always provide a group label",
            "Pre-select a default when possible",
        ]),
        donts: lines(&[
            "Don't use for multiple selections (use checkbox)",
            "Don't use for more than 7 options (use select)",
        ]),
        usage_code: None,
    }
}

fn textarea_entry() -> CatalogueEntry {
    CatalogueEntry {
        default_preview: vec![
            PreviewElement::TextArea(TextAreaPreview {
                label: "Description".into(),
                placeholder: Some("Tell us about your situation...".into()),
                rows: 4,
                ..Default::default()
            }),
            PreviewElement::TextArea(TextAreaPreview {
                label: "Comments".into(),
                rows: 3,
                max_length: Some(500),
                show_count: true,
                ..Default::default()
            }),
        ]
        .into(),
        default_code: r#"<TextArea label="Description"
  placeholder="Tell us about your situation..."
  rows={4} />
<TextArea label="Comments" rows={3}
  maxLength={500} showCount />"#
            .into(),
        variants: vec![VariantPreview::new(
            "Error State",
            vec![PreviewElement::TextArea(TextAreaPreview {
                label: "Reason".into(),
                error: Some("Please provide a reason for your request".into()),
                rows: 4,
                ..Default::default()
            })],
            r#"<TextArea label="Reason"
  error="Please provide a reason for your request" />"#,
        )],
        prop_definitions: vec![
            PropDef::new("label", "string", "TextArea label"),
            PropDef::new("helperText", "string", "Helper text below the textarea"),
            PropDef::new("error", "string", "Error message"),
            PropDef::new("rows", "number", "Number of visible rows").default_value("4"),
            PropDef::new("maxLength", "number", "Maximum character count"),
            PropDef::new("showCount", "boolean", "Show character counter").default_value("false"),
            PropDef::new("disabled", "boolean", "Disables the textarea").default_value("false"),
        ],
        accessibility: lines(&[
            "Label properly associated via htmlFor/id",
            "Error messages linked via aria-describedby",
            "Character count announced to screen readers",
            "aria-invalid set when error is present",
        ]),
        dos: lines(&[
            "Set appropriate rows for expected content length",
            "Use maxLength with showCount for constrained fields",
        ]),
        donts: lines(&[
            "Don't use for single-line input (use Input)",
            "Don't set very small row counts (minimum 3)",
        ]),
        usage_code: None,
    }
}

fn alert_entry() -> CatalogueEntry {
    use AlertVariant::*;

    CatalogueEntry {
        default_preview: vec![
            alert(Info, "Information", "Your application has been received."),
            alert(Success, "Success", "Your password has been updated."),
            alert(Warning, "Warning", "Your session will expire in 5 minutes."),
            alert(Error, "Error", "There was a problem processing your payment."),
        ]
        .into(),
        default_code: r#"<Alert variant="info" title="Information">
  Your application has been received.
</Alert>
<Alert variant="success" title="Success">
  Your password has been updated.
</Alert>
<Alert variant="warning" title="Warning">
  Your session will expire in 5 minutes.
</Alert>
<Alert variant="error" title="Error">
  There was a problem processing your payment.
</Alert>"#
            .into(),
        variants: vec![VariantPreview::new(
            "Dismissible",
            vec![PreviewElement::Alert(AlertPreview {
                variant: Info,
                title: Some("Heads up".into()),
                body: "This alert can be dismissed by clicking the close button.".into(),
                dismissible: true,
            })],
            r#"<Alert variant="info" title="Heads up" dismissible>
  This alert can be dismissed.
</Alert>"#,
        )],
        prop_definitions: vec![
            PropDef::new("variant", "'info' | 'success' | 'warning' | 'error'", "Alert severity")
                .default_value("'info'"),
            PropDef::new("title", "string", "Alert heading"),
            PropDef::new("children", "ReactNode", "Alert description content"),
            PropDef::new("dismissible", "boolean", "Show close button").default_value("false"),
            PropDef::new("onDismiss", "() => void", "Called when alert is dismissed"),
        ],
        accessibility: lines(&[
            "Uses role=\"alert\" for error and warning variants",
            "Uses role=\"status\" for info and success variants",
            "Dismiss button has aria-label=\"Dismiss alert\"",
            "Default icons per variant provide visual redundancy",
        ]),
        dos: lines(&[
            "Use concise, actionable messages",
            "Match variant to severity (error for failures, warning for caution)",
            "Provide a title for scannability",
        ]),
        donts: lines(&[
            "Don't use alerts for non-important information",
            "Don't stack more than 3 alerts at once",
            "Don't use error variant for warnings",
        ]),
        usage_code: None,
    }
}

fn card_entry() -> CatalogueEntry {
    CatalogueEntry {
        default_preview: vec![PreviewElement::Card(CardPreview {
            variant: CardVariant::Default,
            title: "Renew Your Driver's License".into(),
            description: Some("Online renewal available for eligible residents".into()),
            body: Some(
                "Complete your renewal in minutes. You'll need your current license number and a valid payment method."
                    .into(),
            ),
            actions: vec!["Start Renewal".into()],
        })]
        .into(),
        default_code: r#"<Card>
  <CardHeader>
    <CardTitle>Renew Your Driver's License</CardTitle>
    <CardDescription>Online renewal available for eligible residents</CardDescription>
  </CardHeader>
  <CardContent>...</CardContent>
  <CardFooter>
    <Button size="sm">Start Renewal</Button>
  </CardFooter>
</Card>"#
            .into(),
        variants: vec![VariantPreview::new(
            "Variants",
            vec![
                PreviewElement::Card(CardPreview {
                    variant: CardVariant::Default,
                    title: "Default".into(),
                    ..Default::default()
                }),
                PreviewElement::Card(CardPreview {
                    variant: CardVariant::Outline,
                    title: "Outline".into(),
                    ..Default::default()
                }),
                PreviewElement::Card(CardPreview {
                    variant: CardVariant::Elevated,
                    title: "Elevated".into(),
                    ..Default::default()
                }),
            ],
            r#"<Card variant="outline">...</Card>
<Card variant="elevated">...</Card>"#,
        )],
        prop_definitions: vec![
            PropDef::new("variant", "'default' | 'outline' | 'elevated'", "Card style variant")
                .default_value("'default'"),
            PropDef::new("padding", "'sm' | 'md' | 'lg'", "Internal padding").default_value("'md'"),
            PropDef::new("clickable", "boolean", "Add hover effect for clickable cards")
                .default_value("false"),
            PropDef::new("className", "string", "Additional CSS classes"),
        ],
        accessibility: lines(&[
            "Semantic HTML structure with proper heading hierarchy",
            "Clickable cards use appropriate cursor and hover feedback",
            "Card content is accessible to screen readers in reading order",
        ]),
        dos: lines(&[
            "Use cards to group related content",
            "Maintain consistent card layouts within a page",
            "Use CardHeader for scannable titles",
        ]),
        donts: lines(&[
            "Don't nest cards within cards",
            "Don't overload cards with too much content",
            "Don't use cards for single pieces of information (use a list)",
        ]),
        usage_code: None,
    }
}

fn badge_entry() -> CatalogueEntry {
    CatalogueEntry {
        default_preview: vec![
            badge("Default", BadgeVariant::Default, Size::Md),
            badge("Secondary", BadgeVariant::Secondary, Size::Md),
            badge("Success", BadgeVariant::Success, Size::Md),
            badge("Warning", BadgeVariant::Warning, Size::Md),
            badge("Error", BadgeVariant::Error, Size::Md),
            badge("Outline", BadgeVariant::Outline, Size::Md),
        ]
        .into(),
        default_code: r#"<Badge>Default</Badge>
<Badge variant="secondary">Secondary</Badge>
<Badge variant="success">Success</Badge>
<Badge variant="warning">Warning</Badge>
<Badge variant="error">Error</Badge>
<Badge variant="outline">Outline</Badge>"#
            .into(),
        variants: vec![VariantPreview::new(
            "Sizes",
            vec![
                badge("Small", BadgeVariant::Default, Size::Sm),
                badge("Medium", BadgeVariant::Default, Size::Md),
            ],
            r#"<Badge size="sm">Small</Badge>
<Badge size="md">Medium</Badge>"#,
        )],
        prop_definitions: vec![
            PropDef::new(
                "variant",
                "'default' | 'secondary' | 'success' | 'warning' | 'error' | 'outline'",
                "Badge color variant",
            )
            .default_value("'default'"),
            PropDef::new("size", "'sm' | 'md'", "Badge size").default_value("'md'"),
            PropDef::new("children", "ReactNode", "Badge content").required(),
        ],
        accessibility: lines(&[
            "Text content is readable by screen readers",
            "Color is not the sole indicator; text provides context",
            "Meets contrast requirements in all variants",
        ]),
        dos: lines(&[
            "Use for status indicators and categories",
            "Keep text short (1-2 words)",
            "Use consistent variant meanings across the application",
        ]),
        donts: lines(&[
            "Don't use badges for long text",
            "Don't rely solely on color to convey meaning",
        ]),
        usage_code: None,
    }
}

fn table_entry() -> CatalogueEntry {
    let row = |cells: [&str; 3]| cells.iter().map(|c| c.to_string()).collect::<Vec<_>>();

    CatalogueEntry {
        default_preview: vec![PreviewElement::Table(TablePreview {
            headers: lines(&["Service", "Agency", "Status"]),
            rows: vec![
                row(["Driver's License Renewal", "DMV", "Available"]),
                row(["SNAP Benefits", "DSS", "Available"]),
                row(["Business Registration", "SCC", "Maintenance"]),
            ],
            striped: true,
            hoverable: true,
        })]
        .into(),
        default_code: r#"<Table striped hoverable>
  <TableHeader>
    <TableRow>
      <TableHead>Service</TableHead>
      <TableHead>Agency</TableHead>
      <TableHead>Status</TableHead>
    </TableRow>
  </TableHeader>
  <TableBody>...</TableBody>
</Table>"#
            .into(),
        variants: Vec::new(),
        prop_definitions: vec![
            PropDef::new("striped", "boolean", "Alternating row backgrounds")
                .default_value("false"),
            PropDef::new("hoverable", "boolean", "Highlight rows on hover").default_value("false"),
            PropDef::new("compact", "boolean", "Reduced padding for dense data")
                .default_value("false"),
        ],
        accessibility: lines(&[
            "Uses semantic <table>, <thead>, <tbody>, <th>, <td>",
            "Column headers use scope=\"col\"",
            "Responsive wrapper allows horizontal scrolling",
            "Screen readers can navigate table structure",
        ]),
        dos: lines(&[
            "Use for structured, comparable data",
            "Keep column headers short and descriptive",
            "Use striped rows for tables with many rows",
        ]),
        donts: lines(&[
            "Don't use tables for layout purposes",
            "Don't make tables wider than necessary",
        ]),
        usage_code: None,
    }
}

fn breadcrumb_entry() -> CatalogueEntry {
    CatalogueEntry {
        default_preview: vec![PreviewElement::Breadcrumb(BreadcrumbPreview {
            items: vec![
                Crumb::link("Home", "/"),
                Crumb::link("Services", "/components"),
                Crumb::current("Driver's License Renewal"),
            ],
        })]
        .into(),
        default_code: r#"<Breadcrumb
  items={[
    { label: 'Home', href: '/' },
    { label: 'Services', href: '/services' },
    { label: "Driver's License Renewal" },
  ]}
/>"#
        .into(),
        variants: Vec::new(),
        prop_definitions: vec![
            PropDef::new(
                "items",
                "{ label: string, href?: string }[]",
                "Breadcrumb items (last one is current page)",
            )
            .required(),
            PropDef::new("separator", "string", "Separator character between items")
                .default_value("'/'"),
        ],
        accessibility: lines(&[
            "Uses <nav> with aria-label=\"Breadcrumb\"",
            "Current page marked with aria-current=\"page\"",
            "Separator is hidden from screen readers via aria-hidden",
        ]),
        dos: lines(&[
            "Show the full path from home to current page",
            "Make all items except the last clickable links",
            "Keep labels short and matching page titles",
        ]),
        donts: lines(&[
            "Don't use breadcrumbs for fewer than 2 levels",
            "Don't use as the primary navigation",
        ]),
        usage_code: None,
    }
}

fn accordion_entry() -> CatalogueEntry {
    CatalogueEntry {
        default_preview: vec![PreviewElement::Accordion(AccordionPreview {
            mode: AccordionMode::Single,
            sections: vec![
                section(
                    "How do I renew my driver's license?",
                    "You can renew your Virginia driver's license online, by mail, or in person at any DMV customer service center. Online renewals are available if your license hasn't been expired for more than 2 years.",
                    false,
                ),
                section(
                    "What documents do I need?",
                    "You'll need your current license number, Social Security number, and a valid payment method. If renewing in person, bring two proofs of Virginia residency.",
                    false,
                ),
                section(
                    "How long does processing take?",
                    "Online renewals are processed within 7-10 business days. In-person renewals include a temporary license issued the same day.",
                    false,
                ),
            ],
        })]
        .into(),
        default_code: r#"<Accordion type="single">
  <AccordionItem title="How do I renew my driver's license?">
    You can renew online, by mail, or in person...
  </AccordionItem>
  <AccordionItem title="What documents do I need?">
    You'll need your current license number...
  </AccordionItem>
</Accordion>"#
            .into(),
        variants: vec![VariantPreview::new(
            "Multiple Open",
            vec![PreviewElement::Accordion(AccordionPreview {
                mode: AccordionMode::Multiple,
                sections: vec![
                    section("First section", "This section is open by default.", true),
                    section(
                        "Second section",
                        "Multiple sections can be open simultaneously.",
                        true,
                    ),
                    section("Third section", "This section is closed by default.", false),
                ],
            })],
            r#"<Accordion type="multiple" defaultOpen={['0', '1']}>
  ...
</Accordion>"#,
        )],
        prop_definitions: vec![
            PropDef::new("type", "'single' | 'multiple'", "Allow one or multiple sections open")
                .default_value("'single'"),
            PropDef::new("defaultOpen", "string[]", "IDs of initially open sections"),
            PropDef::new("title", "string", "AccordionItem header text").required(),
            PropDef::new("children", "ReactNode", "AccordionItem content").required(),
        ],
        accessibility: lines(&[
            "Header buttons use aria-expanded and aria-controls",
            "Content panels use role=\"region\" with aria-labelledby",
            "Enter and Space toggle sections",
            "Focus management follows WAI-ARIA Accordion pattern",
        ]),
        dos: lines(&[
            "Use for FAQ sections and progressive disclosure",
            "Keep headers concise and descriptive",
            "Use \"single\" type when content sections are long",
        ]),
        donts: lines(&[
            "Don't nest accordions within accordions",
            "Don't use for critical content that users must see",
            "Don't hide primary actions inside accordions",
        ]),
        usage_code: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_entry_has_props_and_accessibility() {
        for (slug, entry) in builtin_entries() {
            assert!(!entry.prop_definitions.is_empty(), "{} has no props", slug);
            assert!(!entry.accessibility.is_empty(), "{} has no a11y notes", slug);
            assert!(!entry.default_preview.is_empty(), "{} has no preview", slug);
        }
    }

    #[test]
    fn test_button_entry_shape() {
        let entries = builtin_entries();
        let button = &entries["button"];
        assert_eq!(button.variants.len(), 2);
        assert!(button.prop("variant").is_some());
        assert!(button.prop("children").map(|p| p.required).unwrap_or(false));
        assert!(button.usage_code.is_some());
    }

    #[test]
    fn test_previews_use_matching_element_kinds() {
        let entries = builtin_entries();
        let kinds: Vec<_> = entries["radio"]
            .default_preview
            .elements
            .iter()
            .map(|e| e.kind())
            .collect();
        assert_eq!(kinds, vec!["RadioGroup"]);
    }
}
