//! # Service Registry
//!
//! ERP 백엔드의 모든 리포지토리와 서비스를 프로세스 전역 싱글톤으로 관리하는 레지스트리입니다.
//!
//! `#[repository]` / `#[service]` 매크로가 붙은 구조체는 `inventory`를 통해
//! 컴파일 타임에 [`RepositoryRegistration`] / [`ServiceRegistration`]으로 수집되고,
//! 처음 요청될 때 생성자 함수가 호출되어 [`ServiceLocator`]에 캐싱됩니다.
//! `Database`, `RedisClient` 같은 인프라 컴포넌트는 `main`에서
//! [`ServiceLocator::set`]으로 직접 등록합니다.
//!
//! ## 동작 흐름
//!
//! ```text
//! main
//!  ├─ ServiceLocator::set(Arc<Database>)
//!  ├─ ServiceLocator::set(Arc<RedisClient>)
//!  └─ ServiceLocator::initialize_all()
//!       ├─ Step 1: EmployeeRepository, AttendanceRepository, ...
//!       └─ Step 2: EmployeeService, PayrollService, ...
//!
//! PayrollService::instance()
//!  └─ ServiceLocator::get::<PayrollService>()
//!       ├─ 캐시 적중 → Arc 반환
//!       └─ 캐시 미스 → "payroll" 등록정보 검색 → 생성자 호출 → 캐시 저장
//! ```
//!
//! ## 이름 규칙
//!
//! 타입 이름에서 `Service` / `Repository` 접미사를 제거한 소문자 이름이
//! 매크로의 `name` 인자와 일치해야 합니다 (`PayrollService` ↔ `name = "payroll"`).

use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use crate::utils::display_terminal::{print_boxed_title, print_cache_initialized, print_final_summary, print_step_complete, print_step_start, print_sub_task};

/// 비즈니스 서비스 공통 인터페이스
///
/// `#[service]` 매크로가 자동 구현합니다.
#[async_trait]
pub trait Service: Send + Sync {
    /// 레지스트리 식별 이름
    fn name(&self) -> &str;

    /// 생성 직후 한 번 호출되는 초기화 훅
    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// 데이터 액세스 리포지토리 공통 인터페이스
///
/// `#[repository]` 매크로가 자동 구현합니다.
#[async_trait]
pub trait Repository: Send + Sync {
    /// 레지스트리 식별 이름
    fn name(&self) -> &str;

    /// 연결된 MongoDB 컬렉션 이름
    fn collection_name(&self) -> &str;

    /// 인덱스 생성 등 초기화 훅
    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// `#[service]` 매크로가 생성하는 등록 메타데이터
pub struct ServiceRegistration {
    pub name: &'static str,
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

/// `#[repository]` 매크로가 생성하는 등록 메타데이터
pub struct RepositoryRegistration {
    pub name: &'static str,
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

inventory::collect!(ServiceRegistration);
inventory::collect!(RepositoryRegistration);

static SERVICE_NAME_CACHE: Lazy<HashMap<String, &'static ServiceRegistration>> = Lazy::new(|| {
    let cache: HashMap<_, _> = inventory::iter::<ServiceRegistration>()
        .map(|registration| (clean_registration_name(registration.name), registration))
        .collect();

    print_cache_initialized("Service", cache.len());
    cache
});

static REPOSITORY_NAME_CACHE: Lazy<HashMap<String, &'static RepositoryRegistration>> = Lazy::new(|| {
    let cache: HashMap<_, _> = inventory::iter::<RepositoryRegistration>()
        .map(|registration| (clean_registration_name(registration.name), registration))
        .collect();

    print_cache_initialized("Repository", cache.len());
    cache
});

/// 등록 이름에서 `_service` / `_repository` 접미사를 제거합니다.
fn clean_registration_name(name: &str) -> String {
    name.strip_suffix("_service")
        .or_else(|| name.strip_suffix("_repository"))
        .unwrap_or(name)
        .to_string()
}

/// 전체 경로 타입 이름에서 마지막 세그먼트만 추출합니다.
fn short_type_name(type_name: &str) -> &str {
    match type_name.rfind("::") {
        Some(pos) => &type_name[pos + 2..],
        None => type_name,
    }
}

/// 요청된 타입이 어떤 레지스트리에 속하는지
#[derive(Debug, PartialEq)]
enum ComponentKind {
    Repository(String),
    Service(String),
}

/// `PayrollService` → `Service("payroll")`, `ItemRepository` → `Repository("item")`
fn classify(short_name: &str) -> Option<ComponentKind> {
    if let Some(entity) = short_name.strip_suffix("Repository") {
        return Some(ComponentKind::Repository(entity.to_lowercase()));
    }
    short_name
        .strip_suffix("Service")
        .map(|entity| ComponentKind::Service(entity.to_lowercase()))
}

/// 전역 의존성 컨테이너
///
/// 인스턴스는 `TypeId` 기준으로 보관되며 `RwLock`으로 보호됩니다.
/// 생성 중인 타입을 추적하여 순환 의존성을 감지합니다.
pub struct ServiceLocator {
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
    initializing: RwLock<HashSet<TypeId>>,
}

impl ServiceLocator {
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
            initializing: RwLock::new(HashSet::new()),
        }
    }

    fn cached<T: 'static + Send + Sync>(&self) -> Option<Arc<T>> {
        let instances = self.instances.read().unwrap_or_else(|e| e.into_inner());
        instances
            .get(&TypeId::of::<T>())
            .and_then(|instance| instance.clone().downcast::<T>().ok())
    }

    /// 등록된 인스턴스를 가져오거나 레지스트리에서 생성합니다.
    ///
    /// # Panics
    ///
    /// 등록되지 않은 타입이거나 순환 의존성이 있으면 패닉합니다.
    /// 두 경우 모두 기동 시점(`initialize_all`)에 드러나는 배선 오류입니다.
    pub fn get<T: 'static + Send + Sync>() -> Arc<T> {
        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();

        if let Some(instance) = LOCATOR.cached::<T>() {
            return instance;
        }

        {
            let mut initializing = LOCATOR.initializing.write().unwrap_or_else(|e| e.into_inner());
            if !initializing.insert(type_id) {
                log::error!("❌ Circular dependency detected for type: {}", type_name);
                panic!("Circular dependency detected: {} is already being initialized", type_name);
            }
        }

        // 생성자는 다른 컴포넌트를 get() 할 수 있으므로 instances 락 밖에서 호출
        let created = std::panic::catch_unwind(Self::construct::<T>);

        LOCATOR.initializing
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&type_id);

        match created {
            Ok(instance) => {
                let mut instances = LOCATOR.instances.write().unwrap_or_else(|e| e.into_inner());
                let stored = instances
                    .entry(type_id)
                    .or_insert_with(|| instance.clone() as Arc<dyn Any + Send + Sync>)
                    .clone();
                stored.downcast::<T>().unwrap_or(instance)
            }
            Err(e) => {
                log::error!("Failed to create instance for {}: {:?}", type_name, e);
                panic!("Failed to create instance for {}", type_name);
            }
        }
    }

    fn construct<T: 'static + Send + Sync>() -> Arc<T> {
        let type_name = std::any::type_name::<T>();

        let boxed = match classify(short_type_name(type_name)) {
            Some(ComponentKind::Repository(entity)) => match REPOSITORY_NAME_CACHE.get(&entity) {
                Some(registration) => (registration.constructor)(),
                None => panic!("No repository found for entity: {}", entity),
            },
            Some(ComponentKind::Service(entity)) => match SERVICE_NAME_CACHE.get(&entity) {
                Some(registration) => (registration.constructor)(),
                None => panic!("No service found for entity: {}", entity),
            },
            None => panic!(
                "Service not found: {}. Register it with #[service] / #[repository] or ServiceLocator::set()",
                type_name
            ),
        };

        match boxed.downcast::<Arc<T>>() {
            Ok(instance) => (*instance).clone(),
            Err(_) => panic!("Type mismatch for component: {}", type_name),
        }
    }

    /// 인프라 컴포넌트를 직접 등록합니다.
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let type_name = std::any::type_name::<T>();
        log::info!("📦 Registering: {}", short_type_name(type_name));

        let mut instances = LOCATOR.instances.write().unwrap_or_else(|e| e.into_inner());
        instances.insert(TypeId::of::<T>(), instance as Arc<dyn Any + Send + Sync>);
    }

    /// 수집된 모든 리포지토리와 서비스를 즉시 생성합니다.
    ///
    /// 리포지토리를 먼저 만든 뒤 서비스를 만들어, 배선 오류가 첫 요청이 아닌
    /// 기동 시점에 드러나게 합니다.
    pub async fn initialize_all() -> Result<(), Box<dyn std::error::Error>> {
        print_boxed_title("🔄 INITIALIZING ERP SERVICE REGISTRY");

        let repo_registrations: Vec<_> = inventory::iter::<RepositoryRegistration>().collect();
        let repo_count = repo_registrations.len();

        if repo_count > 0 {
            print_step_start(1, "Creating Repository instances");
            for registration in repo_registrations {
                let _ = (registration.constructor)();
                print_sub_task(registration.name, "✓ Created");
            }
            print_step_complete(1, "Repository instances created", repo_count);
        }

        let service_registrations: Vec<_> = inventory::iter::<ServiceRegistration>().collect();
        let service_count = service_registrations.len();

        if service_count > 0 {
            print_step_start(2, "Creating Service instances");
            for registration in service_registrations {
                let _ = (registration.constructor)();
                print_sub_task(registration.name, "✓ Created");
            }
            print_step_complete(2, "Service instances created", service_count);
        }

        print_final_summary(repo_count, service_count);
        Ok(())
    }
}

static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_registration_name() {
        assert_eq!(clean_registration_name("payroll_service"), "payroll");
        assert_eq!(clean_registration_name("employee_repository"), "employee");
        assert_eq!(clean_registration_name("holiday"), "holiday");
    }

    #[test]
    fn test_classify_component_names() {
        assert_eq!(
            classify("PayrollService"),
            Some(ComponentKind::Service("payroll".to_string()))
        );
        assert_eq!(
            classify("ItemRepository"),
            Some(ComponentKind::Repository("item".to_string()))
        );
        assert_eq!(classify("RedisClient"), None);
    }

    #[test]
    fn test_short_type_name() {
        assert_eq!(
            short_type_name("store_erp_backend::services::payroll::PayrollService"),
            "PayrollService"
        );
        assert_eq!(short_type_name("Database"), "Database");
    }

    #[test]
    fn test_set_then_get_returns_same_instance() {
        struct Marker(u32);

        ServiceLocator::set(Arc::new(Marker(7)));
        let first = ServiceLocator::get::<Marker>();
        let second = ServiceLocator::get::<Marker>();

        assert_eq!(first.0, 7);
        assert!(Arc::ptr_eq(&first, &second));
    }
}
