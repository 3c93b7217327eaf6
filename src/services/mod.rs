/// Resource services
///
/// One service per resource family, each wrapping the shared [`ApiClient`].
/// Services validate arguments locally before issuing any network call and
/// return fully materialized collections from their list operations.
pub mod account;
pub mod actions;
pub mod balance;
pub mod domains;
pub mod firewalls;
pub mod floating_ips;
pub mod load_balancers;
pub mod regions;
pub mod servers;
pub mod vpcs;

pub use account::AccountService;
pub use actions::ActionService;
pub use balance::BalanceService;
pub use domains::DomainService;
pub use firewalls::FirewallService;
pub use floating_ips::FloatingIpService;
pub use load_balancers::LoadBalancerService;
pub use regions::RegionService;
pub use servers::ServerService;
pub use vpcs::VpcService;
