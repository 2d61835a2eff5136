use crate::api::config::Config;
use crate::data::models::notification_recipient::NotificationRecipient;
use crate::data::models::order::Order;
use crate::data::models::order_item::OrderItem;
use crate::data::models::user::User;
use crate::data::repos::implementors::recipient_repo::RecipientRepo;
use crate::notify::mailer::{MailError, Mailer, OutboundEmail, SmtpMailer};

/// Best-effort order notifications. Invoked once per committed order, on a
/// detached task; nothing in here can fail the checkout that triggered it.
pub struct NotificationDispatcher {
    mailer: Box<dyn Mailer>,
}

impl NotificationDispatcher {
    pub fn new(mailer: Box<dyn Mailer>) -> Self {
        NotificationDispatcher { mailer }
    }

    /// Production dispatcher, or None when SMTP is not configured.
    pub fn from_config() -> Option<Self> {
        let config = Config::new();
        let smtp = config.smtp.as_ref()?;

        match SmtpMailer::from_config(smtp) {
            Ok(mailer) => Some(NotificationDispatcher::new(Box::new(mailer))),
            Err(e) => {
                tracing::warn!("SMTP mailer could not be built: {e}");
                None
            }
        }
    }

    /// Fire-and-forget entry point used after an order commit. Detaches
    /// immediately; failures are logged and swallowed.
    pub fn spawn_order_placed(order: Order, items: Vec<OrderItem>, customer: Option<User>) {
        tokio::spawn(async move {
            match NotificationDispatcher::from_config() {
                None => {
                    tracing::info!(
                        "SMTP not configured, skipping notification for order {}",
                        order.order_number
                    );
                }
                Some(dispatcher) => {
                    if let Err(e) = dispatcher
                        .order_placed(&order, &items, customer.as_ref())
                        .await
                    {
                        tracing::warn!(
                            "Notification for order {} failed: {e}",
                            order.order_number
                        );
                    }
                }
            }
        });
    }

    pub async fn order_placed(
        &self,
        order: &Order,
        items: &[OrderItem],
        customer: Option<&User>,
    ) -> Result<(), MailError> {
        let recipients = RecipientRepo::new()
            .get_active()
            .await
            .map_err(|e| MailError::RecipientLookup(e.to_string()))?
            .unwrap_or_default();

        self.send_order_summary(&recipients, order, items, customer)
            .await
    }

    /// Sends one summary email to the given recipients. Public so the
    /// recipient roster can be supplied directly.
    pub async fn send_order_summary(
        &self,
        recipients: &[NotificationRecipient],
        order: &Order,
        items: &[OrderItem],
        customer: Option<&User>,
    ) -> Result<(), MailError> {
        if recipients.is_empty() {
            tracing::info!(
                "No active notification recipients, skipping notification for order {}",
                order.order_number
            );
            return Ok(());
        }

        let to = recipients.iter().map(mailbox_string).collect();
        let subject = format!("New order {}", order.order_number);
        let body = render_order_summary(order, items, customer);

        self.mailer.send(OutboundEmail { to, subject, body }).await?;

        tracing::info!(
            "Notification for order {} sent to {} recipient(s)",
            order.order_number,
            recipients.len()
        );
        Ok(())
    }
}

fn mailbox_string(recipient: &NotificationRecipient) -> String {
    match &recipient.name {
        Some(name) => format!("{name} <{}>", recipient.email),
        None => recipient.email.clone(),
    }
}

/// Plain-text order summary: header, customer block, one line per item,
/// total, optional notes.
pub fn render_order_summary(
    order: &Order,
    items: &[OrderItem],
    customer: Option<&User>,
) -> String {
    let mut lines = Vec::new();

    lines.push(format!("Order {}", order.order_number));
    lines.push(format!(
        "Status: {}",
        order.status.as_deref().unwrap_or("pending")
    ));

    if let Some(user) = customer {
        lines.push(String::new());
        lines.push(format!(
            "Customer: {}",
            user.business_name.as_deref().unwrap_or(&user.email)
        ));
        if let Some(contact) = &user.contact_person {
            lines.push(format!("Contact: {contact}"));
        }
        if let Some(phone) = &user.phone {
            lines.push(format!("Phone: {phone}"));
        }
        lines.push(format!("Email: {}", user.email));
    }

    lines.push(String::new());
    for item in items {
        lines.push(format!(
            "{}  {}  x{} @ {} = {}",
            item.product_code, item.product_name, item.quantity, item.unit_price, item.total_price
        ));
    }

    lines.push(String::new());
    lines.push(format!("Total: {}", order.total_amount));

    if let Some(notes) = &order.notes {
        lines.push(String::new());
        lines.push(format!("Notes: {notes}"));
    }

    lines.join("\n")
}
