use std::sync::Arc;

use async_trait::async_trait;
use domain_identity::command::{NewTechnician, NewUser, ShiftWindow};
use domain_identity::exception::{IdentityException, IdentityResult};
use domain_identity::model::entity::{Role, Shift, User};
use domain_identity::model::vo::TechnicianInfo;
use domain_identity::repository::{ShiftRepo, UserRepo};
use domain_identity::service::TechnicianService;
use typed_builder::TypedBuilder;
use uuid::Uuid;

use crate::user::create_account;

#[derive(TypedBuilder)]
pub struct TechnicianServiceImpl {
    user_repo: Arc<dyn UserRepo>,
    shift_repo: Arc<dyn ShiftRepo>,
}

#[async_trait]
impl TechnicianService for TechnicianServiceImpl {
    async fn register(&self, cmd: NewTechnician) -> IdentityResult<User> {
        let NewTechnician {
            name,
            email,
            password,
            sector,
        } = cmd;
        create_account(
            &self.user_repo,
            NewUser {
                name,
                email,
                password,
                sector,
                role: Role::Technician,
            },
        )
        .await
    }

    async fn list(&self) -> IdentityResult<Vec<TechnicianInfo>> {
        let technicians = self.user_repo.get_by_role(Role::Technician).await?;
        let mut infos = Vec::with_capacity(technicians.len());
        for user in technicians {
            let shift = self.shift_repo.find_by_technician(user.id).await?;
            infos.push(TechnicianInfo { user, shift });
        }
        Ok(infos)
    }

    async fn set_shift(&self, technician_id: Uuid, window: ShiftWindow) -> IdentityResult<Shift> {
        if window.start_time >= window.end_time {
            return Err(IdentityException::InvalidShiftWindow);
        }
        let technician = self
            .user_repo
            .find_by_id(technician_id)
            .await?
            .ok_or(IdentityException::UserNotFound { id: technician_id })?;
        if technician.role != Role::Technician || !technician.active {
            return Err(IdentityException::Validation {
                field: "tecnico".to_string(),
            });
        }

        let existing = self.shift_repo.find_by_technician(technician_id).await?;
        let shift = Shift {
            id: existing.map(|shift| shift.id).unwrap_or_else(Uuid::new_v4),
            technician_id,
            start_time: window.start_time,
            end_time: window.end_time,
        };
        self.shift_repo.upsert(&shift).await?;
        Ok(shift)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use domain_identity::mock::{MockShiftRepo, MockUserRepo};

    fn window(start: &str, end: &str) -> ShiftWindow {
        ShiftWindow {
            start_time: start.parse::<NaiveTime>().unwrap(),
            end_time: end.parse::<NaiveTime>().unwrap(),
        }
    }

    fn technician(id: Uuid) -> User {
        User {
            id,
            role: Role::Technician,
            active: true,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn shift_window_must_start_before_it_ends() {
        let service = TechnicianServiceImpl::builder()
            .user_repo(Arc::new(MockUserRepo::new()))
            .shift_repo(Arc::new(MockShiftRepo::new()))
            .build();

        let err = service.set_shift(Uuid::new_v4(), window("18:00:00", "09:00:00")).await;
        assert!(matches!(err, Err(IdentityException::InvalidShiftWindow)));
    }

    #[tokio::test]
    async fn shift_upsert_reuses_the_existing_row_id() {
        let technician_id = Uuid::new_v4();
        let shift_id = Uuid::new_v4();
        let mut user_repo = MockUserRepo::new();
        user_repo
            .expect_find_by_id()
            .returning(move |id| Ok(Some(technician(id))));
        let mut shift_repo = MockShiftRepo::new();
        shift_repo.expect_find_by_technician().returning(move |technician_id| {
            Ok(Some(Shift {
                id: shift_id,
                technician_id,
                start_time: NaiveTime::MIN,
                end_time: NaiveTime::MIN,
            }))
        });
        shift_repo
            .expect_upsert()
            .times(1)
            .withf(move |shift| shift.id == shift_id)
            .returning(|_| Ok(()));
        let service = TechnicianServiceImpl::builder()
            .user_repo(Arc::new(user_repo))
            .shift_repo(Arc::new(shift_repo))
            .build();

        let shift = service
            .set_shift(technician_id, window("08:00:00", "17:00:00"))
            .await
            .unwrap();
        assert_eq!(shift.id, shift_id);
        assert_eq!(shift.technician_id, technician_id);
    }

    #[tokio::test]
    async fn shift_is_only_for_active_technicians() {
        let mut user_repo = MockUserRepo::new();
        user_repo.expect_find_by_id().returning(|id| {
            Ok(Some(User {
                id,
                role: Role::User,
                active: true,
                ..Default::default()
            }))
        });
        let service = TechnicianServiceImpl::builder()
            .user_repo(Arc::new(user_repo))
            .shift_repo(Arc::new(MockShiftRepo::new()))
            .build();

        let err = service.set_shift(Uuid::new_v4(), window("08:00:00", "17:00:00")).await;
        assert!(matches!(err, Err(IdentityException::Validation { .. })));
    }

    #[tokio::test]
    async fn listing_pairs_each_technician_with_its_shift() {
        let with_shift = Uuid::new_v4();
        let without_shift = Uuid::new_v4();
        let mut user_repo = MockUserRepo::new();
        user_repo
            .expect_get_by_role()
            .returning(move |_| Ok(vec![technician(with_shift), technician(without_shift)]));
        let mut shift_repo = MockShiftRepo::new();
        shift_repo.expect_find_by_technician().returning(move |id| {
            Ok((id == with_shift).then(|| Shift {
                id: Uuid::new_v4(),
                technician_id: id,
                start_time: NaiveTime::MIN,
                end_time: NaiveTime::MIN,
            }))
        });
        let service = TechnicianServiceImpl::builder()
            .user_repo(Arc::new(user_repo))
            .shift_repo(Arc::new(shift_repo))
            .build();

        let infos = service.list().await.unwrap();
        assert_eq!(infos.len(), 2);
        assert!(infos.iter().any(|info| info.shift.is_some()));
        assert!(infos.iter().any(|info| info.shift.is_none()));
    }
}
