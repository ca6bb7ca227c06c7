use anyhow::Context;
use paradise_app::{admin, auth, bookings, search, staff, AppState};
use paradise_booking::BookingForm;
use paradise_catalog::{FilterQuery, RoomStatus};
use paradise_core::{LoginForm, RegisterForm};
use paradise_shared::Masked;
use paradise_store::app_config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "paradise_app=debug,paradise_booking=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!(
        currency = %config.pricing.currency,
        fixed_nights = ?config.pricing.fixed_nights,
        "Starting Hotel Paradise"
    );

    let mut state = AppState::new(config);

    browse(&mut state)?;
    book_as_customer(&mut state).await?;
    review_as_staff(&mut state)?;
    administer(&mut state).await?;

    auth::logout(&mut state);
    tracing::info!("Session finished on {:?} view", state.session.view());
    Ok(())
}

fn browse(state: &mut AppState) -> anyhow::Result<()> {
    let rooms = search::visible_rooms(state);
    tracing::info!("Website lists {} rooms", rooms.len());

    let query: FilterQuery = serde_json::from_str(
        r#"{"priceRange":[500000,2000000],"amenities":["wifi","ac"],"rating":"4.0","sortBy":"price-low"}"#,
    )?;
    let rooms = search::apply_query(state, query)?;
    for room in &rooms {
        tracing::info!("  {} {} ({} VND/night, {:.1})", room.id, room.name, room.price, room.rating);
    }

    let rooms = search::clear_filters(state);
    tracing::info!("Filters cleared, {} rooms", rooms.len());
    Ok(())
}

async fn book_as_customer(state: &mut AppState) -> anyhow::Result<()> {
    let register = RegisterForm {
        name: "Vo Thi F".to_string(),
        email: "vothif@email.com".to_string(),
        phone: "0956789012".to_string(),
        password: Masked::from("paradise"),
        confirm_password: Masked::from("paradise"),
    };
    let user = auth::register(state, &register).await?;
    auth::logout(state);

    let login = LoginForm {
        email: user.email.clone(),
        password: Masked::from("paradise"),
    };
    auth::login(state, &login).await?;

    let mut wizard = bookings::start_booking(state, "2")?;
    *wizard.form_mut() = BookingForm {
        guests: 2,
        first_name: "Vo".to_string(),
        last_name: "Thi F".to_string(),
        email: user.email.clone(),
        phone: "0956789012".to_string(),
        special_requests: "Sea-facing balcony".to_string(),
        card_number: Masked::from("4111 1111 1111 1111"),
        expiry_date: "12/27".to_string(),
        cvv: Masked::from("123"),
        card_name: "VO THI F".to_string(),
        ..BookingForm::default()
    };
    wizard.next()?;
    wizard.next()?;
    wizard.form_mut().agree_terms = true;

    let quote = wizard.quote();
    tracing::info!(
        "Quote: {} nights x {} + fee {} + tax {} = {} {}",
        quote.nights,
        quote.nightly_rate,
        quote.service_fee,
        quote.tax,
        quote.total,
        quote.currency
    );

    let confirmation = bookings::complete_booking(state, &mut wizard).await?;
    tracing::info!("Booking {} confirmed for {}", confirmation.code, confirmation.guest_name);

    bookings::leave_booking(state);
    state.session.open_profile()?;
    auth::logout(state);
    Ok(())
}

fn review_as_staff(state: &mut AppState) -> anyhow::Result<()> {
    state.session.staff_access();

    for request in state.requests.pending() {
        tracing::info!("Pending {} from {}", request.code, request.customer_name);
    }
    staff::approve_request(state, "1")?;
    staff::reject_request(state, "3", "Suite reserved for maintenance")?;

    let previous = staff::update_room_status(state, "2", RoomStatus::Available)?;
    tracing::info!("Room 102 was {}", previous);

    for (status, count) in state.room_board.stats() {
        tracing::info!("  {}: {}", status, count);
    }

    auth::logout(state);
    Ok(())
}

async fn administer(state: &mut AppState) -> anyhow::Result<()> {
    state.session.admin_access();

    let stats = admin::activity_stats(state)?;
    tracing::info!(
        "Activity: {} entries, {} errors, {} warnings, {} security",
        stats.total,
        stats.errors,
        stats.warnings,
        stats.security
    );

    let record = admin::backup_now(state).await?;
    let restored = admin::restore(state, record.id, true)?;
    tracing::info!("Restored {} entries from backup {}", restored, record.id);
    Ok(())
}
