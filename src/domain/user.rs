use rand::Rng;
use serde::{Deserialize, Serialize};

/// One synthetic employee record. Generated once at startup and never mutated;
/// views only ever read or copy it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub job: String,
    pub department: String,
}

// Reference sample data: Korean surnames, given names, jobs and departments.
const FAMILY_NAMES: [&str; 20] = [
    "김", "이", "박", "최", "정", "강", "조", "윤", "장", "임", "한", "오", "서", "신", "권",
    "황", "안", "송", "전", "홍",
];

const GIVEN_NAMES: [&str; 20] = [
    "민준", "서준", "예준", "도윤", "시우", "주원", "하준", "지호", "지후", "준서", "서연",
    "서윤", "지우", "서현", "민서", "하은", "하윤", "윤서", "지민", "지유",
];

const JOBS: [&str; 8] = [
    "매니저", "책임자", "주니어", "시니어", "인턴", "VP", "CTO", "CEO",
];

const DEPARTMENTS: [&str; 8] = [
    "개발", "마케팅", "영업", "인사", "재무", "경영", "디자인", "서비스",
];

/// Generate `count` random users. Ids are 1-based and follow generation order;
/// names and emails may collide, that is fine for demo data. Draws from the
/// process-wide RNG, so runs are not reproducible.
pub fn generate_users(count: usize) -> Vec<User> {
    let mut rng = rand::thread_rng();

    (0..count)
        .map(|i| {
            let name = format!(
                "{}{}",
                FAMILY_NAMES[rng.gen_range(0..FAMILY_NAMES.len())],
                GIVEN_NAMES[rng.gen_range(0..GIVEN_NAMES.len())]
            );
            let email = format!("{}{}@example.com", name.to_lowercase(), rng.gen_range(0..1000));
            User {
                id: (i + 1) as u64,
                name,
                email,
                job: JOBS[rng.gen_range(0..JOBS.len())].to_string(),
                department: DEPARTMENTS[rng.gen_range(0..DEPARTMENTS.len())].to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_requested_count_with_sequential_ids() {
        let users = generate_users(250);
        assert_eq!(users.len(), 250);
        for (i, user) in users.iter().enumerate() {
            assert_eq!(user.id, (i + 1) as u64);
        }
    }

    #[test]
    fn fields_come_from_the_candidate_sets() {
        for user in generate_users(100) {
            assert!(JOBS.contains(&user.job.as_str()));
            assert!(DEPARTMENTS.contains(&user.department.as_str()));
            assert!(
                FAMILY_NAMES
                    .iter()
                    .any(|family| user.name.starts_with(family))
            );
            assert!(
                GIVEN_NAMES.iter().any(|given| user.name.ends_with(given)),
                "unexpected name {}",
                user.name
            );
            assert!(user.email.ends_with("@example.com"));
        }
    }
}
