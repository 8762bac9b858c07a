//! Static label sets for the languages the detector can produce.
//!
//! All strings stay within Latin-1 so the PDF adapter's WinAnsi encoding
//! renders them without substitution.

use facture_model::InvoiceStatus;
use facture_resolve::LanguageCode;

pub struct Labels {
    pub document_title: &'static str,
    pub from: &'static str,
    pub to: &'static str,
    pub issue_date: &'static str,
    pub due_date: &'static str,
    pub currency: &'static str,
    pub payment_terms: &'static str,
    pub days: &'static str,
    pub description: &'static str,
    pub quantity: &'static str,
    pub rate: &'static str,
    pub amount: &'static str,
    pub subtotal: &'static str,
    pub tax: &'static str,
    pub total: &'static str,
    pub payment_method: &'static str,
    pub notes: &'static str,
    pub tax_id: &'static str,
    pub business_license: &'static str,
    /// Indexed by [draft, sent, paid, overdue, cancelled].
    statuses: [&'static str; 5],
}

impl Labels {
    pub fn status(&self, status: InvoiceStatus) -> &'static str {
        match status {
            InvoiceStatus::Draft => self.statuses[0],
            InvoiceStatus::Sent => self.statuses[1],
            InvoiceStatus::Paid => self.statuses[2],
            InvoiceStatus::Overdue => self.statuses[3],
            InvoiceStatus::Cancelled => self.statuses[4],
        }
    }
}

static EN: Labels = Labels {
    document_title: "Invoice",
    from: "From",
    to: "To",
    issue_date: "Issue date",
    due_date: "Due date",
    currency: "Currency",
    payment_terms: "Payment terms",
    days: "days",
    description: "Description",
    quantity: "Qty",
    rate: "Rate",
    amount: "Amount",
    subtotal: "Subtotal",
    tax: "Tax",
    total: "Total",
    payment_method: "Payment method",
    notes: "Notes",
    tax_id: "Tax ID",
    business_license: "Business license",
    statuses: ["Draft", "Sent", "Paid", "Overdue", "Cancelled"],
};

static DA: Labels = Labels {
    document_title: "Faktura",
    from: "Fra",
    to: "Til",
    issue_date: "Fakturadato",
    due_date: "Forfaldsdato",
    currency: "Valuta",
    payment_terms: "Betalingsbetingelser",
    days: "dage",
    description: "Beskrivelse",
    quantity: "Antal",
    rate: "Pris",
    amount: "Beløb",
    subtotal: "Subtotal",
    tax: "Moms",
    total: "I alt",
    payment_method: "Betalingsmetode",
    notes: "Bemærkninger",
    tax_id: "CVR-nr.",
    business_license: "Licensnr.",
    statuses: ["Udkast", "Sendt", "Betalt", "Forfalden", "Annulleret"],
};

static DE: Labels = Labels {
    document_title: "Rechnung",
    from: "Von",
    to: "An",
    issue_date: "Rechnungsdatum",
    due_date: "Fälligkeitsdatum",
    currency: "Währung",
    payment_terms: "Zahlungsziel",
    days: "Tage",
    description: "Beschreibung",
    quantity: "Menge",
    rate: "Preis",
    amount: "Betrag",
    subtotal: "Zwischensumme",
    tax: "MwSt.",
    total: "Gesamt",
    payment_method: "Zahlungsmethode",
    notes: "Anmerkungen",
    tax_id: "USt-IdNr.",
    business_license: "Gewerbelizenz",
    statuses: ["Entwurf", "Versendet", "Bezahlt", "Überfällig", "Storniert"],
};

static FR: Labels = Labels {
    document_title: "Facture",
    from: "De",
    to: "À",
    issue_date: "Date de facturation",
    due_date: "Date d'échéance",
    currency: "Devise",
    payment_terms: "Conditions de paiement",
    days: "jours",
    description: "Description",
    quantity: "Quantité",
    rate: "Prix",
    amount: "Montant",
    subtotal: "Sous-total",
    tax: "TVA",
    total: "Total",
    payment_method: "Mode de paiement",
    notes: "Remarques",
    tax_id: "N° TVA",
    business_license: "Licence",
    statuses: ["Brouillon", "Envoyée", "Payée", "En retard", "Annulée"],
};

static ES: Labels = Labels {
    document_title: "Factura",
    from: "De",
    to: "Para",
    issue_date: "Fecha de emisión",
    due_date: "Fecha de vencimiento",
    currency: "Moneda",
    payment_terms: "Condiciones de pago",
    days: "días",
    description: "Descripción",
    quantity: "Cantidad",
    rate: "Precio",
    amount: "Importe",
    subtotal: "Subtotal",
    tax: "IVA",
    total: "Total",
    payment_method: "Método de pago",
    notes: "Notas",
    tax_id: "NIF",
    business_license: "Licencia",
    statuses: ["Borrador", "Enviada", "Pagada", "Vencida", "Cancelada"],
};

pub fn labels_for(language: LanguageCode) -> &'static Labels {
    match language {
        LanguageCode::En => &EN,
        LanguageCode::Da => &DA,
        LanguageCode::De => &DE,
        LanguageCode::Fr => &FR,
        LanguageCode::Es => &ES,
    }
}
