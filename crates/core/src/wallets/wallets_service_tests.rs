use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::wallets_model::{NewWallet, Wallet, WalletUpdate};
use super::wallets_service::WalletService;
use super::wallets_traits::{WalletServiceTrait, WalletsApi};
use crate::errors::{Error, Result};
use crate::events::{MockEventSink, StoreEvent};
use crate::ids::{EntityId, PlaceholderIds};

// --- Mock backend ---

struct MockWalletsApi {
    wallets: Arc<Mutex<Vec<Wallet>>>,
    list_calls: AtomicUsize,
    fail_mutations: bool,
}

impl MockWalletsApi {
    fn new(wallets: Vec<Wallet>) -> Self {
        Self {
            wallets: Arc::new(Mutex::new(wallets)),
            list_calls: AtomicUsize::new(0),
            fail_mutations: false,
        }
    }

    fn failing(wallets: Vec<Wallet>) -> Self {
        Self {
            fail_mutations: true,
            ..Self::new(wallets)
        }
    }
}

#[async_trait]
impl WalletsApi for MockWalletsApi {
    async fn list_wallets(&self) -> Result<Vec<Wallet>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.wallets.lock().unwrap().clone())
    }

    async fn create_wallet(&self, new_wallet: NewWallet) -> Result<Wallet> {
        if self.fail_mutations {
            return Err(Error::Unexpected("backend down".to_string()));
        }
        let wallet = Wallet {
            id: EntityId::Confirmed(100),
            name: new_wallet.name,
            description: new_wallet.description,
            wallet_type: new_wallet.wallet_type,
            balance_cents: new_wallet.balance_cents,
            currency: new_wallet.currency,
            is_active: true,
            ..Wallet::default()
        };
        self.wallets.lock().unwrap().push(wallet.clone());
        Ok(wallet)
    }

    async fn update_wallet(&self, update: WalletUpdate) -> Result<Wallet> {
        if self.fail_mutations {
            return Err(Error::Unexpected("backend down".to_string()));
        }
        let mut wallets = self.wallets.lock().unwrap();
        let wallet = wallets
            .iter_mut()
            .find(|w| w.id == update.id)
            .expect("wallet exists");
        update.apply_to(wallet);
        Ok(wallet.clone())
    }
}

fn wallet(id: i64, name: &str, balance_cents: i64) -> Wallet {
    Wallet {
        id: EntityId::Confirmed(id),
        name: name.to_string(),
        wallet_type: "cash".to_string(),
        balance_cents,
        currency: "PHP".to_string(),
        is_active: true,
        ..Wallet::default()
    }
}

fn new_wallet(name: &str) -> NewWallet {
    NewWallet {
        name: name.to_string(),
        description: None,
        wallet_type: "cash".to_string(),
        balance_cents: 0,
        currency: "PHP".to_string(),
    }
}

fn service(api: MockWalletsApi) -> (WalletService, MockEventSink) {
    let sink = MockEventSink::new();
    let service = WalletService::new(
        Arc::new(api),
        Arc::new(sink.clone()),
        Arc::new(PlaceholderIds::new()),
    );
    (service, sink)
}

#[tokio::test]
async fn test_list_is_cached_across_refreshes() {
    let api = MockWalletsApi::new(vec![wallet(1, "Cash", 500)]);
    let service = WalletService::new(
        Arc::new(api),
        Arc::new(MockEventSink::new()),
        Arc::new(PlaceholderIds::new()),
    );

    service.refresh(false).await;
    service.refresh(false).await;

    assert_eq!(service.wallets().await.len(), 1);
}

#[tokio::test]
async fn test_active_wallets_filters_inactive_and_deleted() {
    let mut inactive = wallet(2, "Old", 0);
    inactive.is_active = false;
    let mut deleted = wallet(3, "Gone", 0);
    deleted.is_deleted = true;

    let (service, _) = service(MockWalletsApi::new(vec![
        wallet(1, "Cash", 500),
        inactive,
        deleted,
    ]));
    service.refresh(false).await;

    let active = service.active_wallets().await;
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].name, "Cash");
}

#[tokio::test]
async fn test_create_replaces_placeholder_with_server_row() {
    let (service, sink) = service(MockWalletsApi::new(vec![wallet(1, "Cash", 500)]));
    service.refresh(false).await;

    let created = service.create_wallet(new_wallet("Savings")).await.unwrap();

    assert_eq!(created.id, EntityId::Confirmed(100));
    let wallets = service.wallets().await;
    assert_eq!(wallets.len(), 2);
    // The confirmed row sits where the placeholder was prepended.
    assert_eq!(wallets[0].id, EntityId::Confirmed(100));
    assert!(wallets.iter().all(|w| w.id.is_confirmed()));
    assert!(matches!(
        sink.events().as_slice(),
        [StoreEvent::WalletsChanged { .. }]
    ));
}

#[tokio::test]
async fn test_create_failure_rolls_back_to_snapshot() {
    let original = vec![wallet(1, "Cash", 500)];
    let (service, sink) = service(MockWalletsApi::failing(original.clone()));
    service.refresh(false).await;

    let result = service.create_wallet(new_wallet("Savings")).await;

    assert!(result.is_err());
    assert_eq!(service.wallets().await, original);
    assert!(sink.is_empty());
}

#[tokio::test]
async fn test_create_rejects_empty_name_before_any_call() {
    let (service, _) = service(MockWalletsApi::new(vec![]));
    service.refresh(false).await;

    let result = service.create_wallet(new_wallet("  ")).await;

    assert!(matches!(result, Err(Error::Validation(_))));
    assert!(service.wallets().await.is_empty());
}

#[tokio::test]
async fn test_update_splices_fields_and_reconciles() {
    let (service, _) = service(MockWalletsApi::new(vec![wallet(1, "Cash", 500)]));
    service.refresh(false).await;

    let updated = service
        .update_wallet(WalletUpdate {
            id: EntityId::Confirmed(1),
            name: "Cash (renamed)".to_string(),
            description: None,
            wallet_type: "cash".to_string(),
            is_active: false,
        })
        .await
        .unwrap();

    assert_eq!(updated.name, "Cash (renamed)");
    let wallets = service.wallets().await;
    assert_eq!(wallets[0].name, "Cash (renamed)");
    assert!(!wallets[0].is_active);
    // Balance only moves through transactions.
    assert_eq!(wallets[0].balance_cents, 500);
}

#[tokio::test]
async fn test_update_failure_restores_original_row() {
    let original = vec![wallet(1, "Cash", 500)];
    let (service, _) = service(MockWalletsApi::failing(original.clone()));
    service.refresh(false).await;

    let result = service
        .update_wallet(WalletUpdate {
            id: EntityId::Confirmed(1),
            name: "Cash (renamed)".to_string(),
            description: None,
            wallet_type: "cash".to_string(),
            is_active: true,
        })
        .await;

    assert!(result.is_err());
    assert_eq!(service.wallets().await, original);
}
