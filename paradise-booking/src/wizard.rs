use paradise_catalog::{BookingQuote, PricingEngine, Room};

use crate::gateway::BookingGateway;
use crate::models::{BookingConfirmation, BookingForm, BookingStep, BookingSubmission, MAX_GUESTS};
use crate::{BookingError, BookingResult};

/// Three-step booking dialog for a single room.
///
/// Details → PersonalInfo → Payment, moved with `next` and `back`.
/// `cancel` closes the dialog from Details only; later steps go `back`.
/// `complete` is only accepted on Payment with the terms box ticked.
pub struct BookingWizard {
    room: Room,
    step: BookingStep,
    form: BookingForm,
    pricing: PricingEngine,
}

impl BookingWizard {
    pub fn new(room: Room, pricing: PricingEngine) -> Self {
        Self {
            room,
            step: BookingStep::Details,
            form: BookingForm::default(),
            pricing,
        }
    }

    pub fn room(&self) -> &Room {
        &self.room
    }

    pub fn step(&self) -> BookingStep {
        self.step
    }

    pub fn form(&self) -> &BookingForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut BookingForm {
        &mut self.form
    }

    pub fn quote(&self) -> BookingQuote {
        self.pricing
            .quote(&self.room, self.form.check_in, self.form.check_out)
    }

    /// Validate the current step and move forward
    pub fn next(&mut self) -> BookingResult<BookingStep> {
        let next = self.step.next().ok_or(BookingError::InvalidStep {
            from: self.step,
            action: "continue",
        })?;

        self.validate_step(self.step)?;
        self.step = next;
        Ok(next)
    }

    pub fn back(&mut self) -> BookingResult<BookingStep> {
        let previous = self.step.previous().ok_or(BookingError::InvalidStep {
            from: self.step,
            action: "go back",
        })?;
        self.step = previous;
        Ok(previous)
    }

    /// Close the dialog. Only offered on the first step.
    pub fn cancel(&mut self) -> BookingResult<()> {
        if self.step != BookingStep::Details {
            return Err(BookingError::InvalidStep {
                from: self.step,
                action: "cancel",
            });
        }
        tracing::debug!("Booking dialog for {} cancelled", self.room.name);
        Ok(())
    }

    /// State of the "Complete booking" button
    pub fn can_complete(&self) -> bool {
        self.step == BookingStep::Payment && self.form.agree_terms
    }

    /// Submit the booking. On success the dialog returns to the first step.
    pub async fn complete<G>(&mut self, gateway: &G) -> BookingResult<BookingConfirmation>
    where
        G: BookingGateway + ?Sized,
    {
        if self.step != BookingStep::Payment {
            return Err(BookingError::InvalidStep {
                from: self.step,
                action: "complete",
            });
        }
        if !self.form.agree_terms {
            return Err(BookingError::TermsNotAccepted);
        }
        self.validate_step(BookingStep::Payment)?;

        let submission = BookingSubmission {
            room_id: self.room.id.clone(),
            room_name: self.room.name.clone(),
            form: self.form.clone(),
            quote: self.quote(),
        };

        let confirmation = gateway.submit(&submission).await?;
        self.step = BookingStep::Details;
        Ok(confirmation)
    }

    fn validate_step(&self, step: BookingStep) -> BookingResult<()> {
        let form = &self.form;
        match step {
            BookingStep::Details => {
                if form.guests == 0 || form.guests > MAX_GUESTS {
                    return Err(BookingError::InvalidGuestCount {
                        got: form.guests,
                        max: MAX_GUESTS,
                    });
                }
            }
            BookingStep::PersonalInfo => {
                require(&form.first_name, "first name")?;
                require(&form.last_name, "last name")?;
                require(&form.email, "email")?;
                require(&form.phone, "phone number")?;
            }
            BookingStep::Payment => {
                if form.card_number.is_blank() {
                    return Err(BookingError::MissingField("card number"));
                }
                require(&form.expiry_date, "expiry date")?;
                if form.cvv.is_blank() {
                    return Err(BookingError::MissingField("CVV"));
                }
                require(&form.card_name, "name on card")?;
            }
        }
        Ok(())
    }
}

fn require(value: &str, field: &'static str) -> BookingResult<()> {
    if value.trim().is_empty() {
        return Err(BookingError::MissingField(field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::SimulatedBookingGateway;
    use paradise_catalog::RoomCatalog;
    use paradise_core::SimulatedLatency;
    use paradise_shared::Masked;

    fn wizard() -> BookingWizard {
        let room = RoomCatalog::with_fixture().get("2").unwrap().clone();
        BookingWizard::new(room, PricingEngine::default())
    }

    fn fill_personal(form: &mut BookingForm) {
        form.first_name = "Nguyen".to_string();
        form.last_name = "Van A".to_string();
        form.email = "nguyenvana@email.com".to_string();
        form.phone = "0901234567".to_string();
    }

    fn fill_payment(form: &mut BookingForm) {
        form.card_number = Masked::from("1234 5678 9012 3456");
        form.expiry_date = "12/27".to_string();
        form.cvv = Masked::from("123");
        form.card_name = "NGUYEN VAN A".to_string();
    }

    #[test]
    fn test_linear_navigation() {
        let mut wizard = wizard();
        assert!(matches!(
            wizard.back(),
            Err(BookingError::InvalidStep { from: BookingStep::Details, .. })
        ));

        assert_eq!(wizard.next().unwrap(), BookingStep::PersonalInfo);

        // Personal info is required before payment
        assert!(matches!(wizard.next(), Err(BookingError::MissingField("first name"))));
        fill_personal(wizard.form_mut());
        assert_eq!(wizard.next().unwrap(), BookingStep::Payment);

        assert!(matches!(wizard.next(), Err(BookingError::InvalidStep { .. })));
        assert_eq!(wizard.back().unwrap(), BookingStep::PersonalInfo);
    }

    #[test]
    fn test_cancel_only_from_details() {
        let mut wizard = wizard();
        assert!(wizard.cancel().is_ok());

        wizard.next().unwrap();
        assert!(matches!(
            wizard.cancel(),
            Err(BookingError::InvalidStep {
                from: BookingStep::PersonalInfo,
                action: "cancel"
            })
        ));
        assert_eq!(wizard.step(), BookingStep::PersonalInfo);

        fill_personal(wizard.form_mut());
        wizard.next().unwrap();
        assert!(matches!(
            wizard.cancel(),
            Err(BookingError::InvalidStep { from: BookingStep::Payment, .. })
        ));

        wizard.back().unwrap();
        wizard.back().unwrap();
        assert!(wizard.cancel().is_ok());
    }

    #[test]
    fn test_guest_count_checked_on_details() {
        let mut wizard = wizard();
        wizard.form_mut().guests = 5;
        assert!(matches!(
            wizard.next(),
            Err(BookingError::InvalidGuestCount { got: 5, max: 4 })
        ));
        assert_eq!(wizard.step(), BookingStep::Details);
    }

    #[test]
    fn test_quote_ignores_selected_dates() {
        let mut wizard = wizard();
        let check_out = wizard.form().check_in + chrono::Days::new(7);
        wizard.form_mut().check_out = check_out;

        let quote = wizard.quote();
        assert_eq!(quote.nights, 2);
        assert_eq!(quote.total, 1_450_000 * 2 + 50_000 + 290_000);
    }

    #[tokio::test]
    async fn test_complete_requires_terms() {
        let gateway = SimulatedBookingGateway::new(SimulatedLatency::none());
        let mut wizard = wizard();
        fill_personal(wizard.form_mut());
        fill_payment(wizard.form_mut());

        assert!(matches!(
            wizard.complete(&gateway).await,
            Err(BookingError::InvalidStep { action: "complete", .. })
        ));

        wizard.next().unwrap();
        wizard.next().unwrap();
        assert!(!wizard.can_complete());
        assert!(matches!(
            wizard.complete(&gateway).await,
            Err(BookingError::TermsNotAccepted)
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_complete_returns_confirmation_and_resets() {
        let gateway = SimulatedBookingGateway::default();
        let mut wizard = wizard();
        fill_personal(wizard.form_mut());
        wizard.next().unwrap();
        wizard.next().unwrap();
        fill_payment(wizard.form_mut());
        wizard.form_mut().agree_terms = true;
        assert!(wizard.can_complete());

        let confirmation = wizard.complete(&gateway).await.unwrap();

        assert!(confirmation.code.starts_with("BK"));
        assert_eq!(confirmation.code.len(), 8);
        assert_eq!(confirmation.room_id, "2");
        assert_eq!(confirmation.guest_name, "Nguyen Van A");
        assert_eq!(confirmation.quote.total, 3_240_000);
        assert_eq!(wizard.step(), BookingStep::Details);
    }

    #[tokio::test]
    async fn test_complete_requires_card_fields() {
        let gateway = SimulatedBookingGateway::new(SimulatedLatency::none());
        let mut wizard = wizard();
        fill_personal(wizard.form_mut());
        wizard.next().unwrap();
        wizard.next().unwrap();
        wizard.form_mut().agree_terms = true;

        assert!(matches!(
            wizard.complete(&gateway).await,
            Err(BookingError::MissingField("card number"))
        ));
    }
}
