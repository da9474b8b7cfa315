//! Static informational page catalog
//!
//! The company pages carry fixed Korean copy; only their structure is
//! served here, rendering is the front-end's job.

use perfee_types::{PageContent, PageSection, PageSummary};

pub fn catalog() -> Vec<PageContent> {
	vec![
		page(
			"about",
			"회사소개",
			vec![
				section(
					Some("회사 개요"),
					"당사는 매장 음악 사용에 따른 공연권료를 권리자를 대신하여 징수하고 \
					 분배하는 공연권 통합 징수 전문 기업입니다.",
				),
				section(
					Some("주요 연혁"),
					"문화체육관광부 승인 아래 업종별 공연권료 통합 징수 업무를 수행하고 있습니다.",
				),
			],
		),
		page(
			"greeting",
			"인사말",
			vec![section(
				None,
				"음악을 사용하는 사업장과 권리자를 잇는 투명한 징수·분배로 건강한 음악 생태계를 \
				 만들어 가겠습니다.",
			)],
		),
		page(
			"services",
			"주요 서비스",
			vec![
				section(
					Some("공연권료 통합 징수"),
					"업종별 기준에 따라 산출된 공연권료를 하나의 고지서로 통합하여 납부할 수 \
					 있습니다.",
				),
				section(
					Some("요금 계산기"),
					"업종과 규모를 입력하면 월 납부액을 즉시 확인할 수 있는 간편 계산기를 \
					 제공합니다.",
				),
				section(
					Some("납부 상담"),
					"신규 납부 대상 여부와 절차에 대해 전문 상담원이 안내해 드립니다.",
				),
			],
		),
		page(
			"fee-guide",
			"공연권료 안내",
			vec![
				section(
					Some("공연권료란"),
					"매장에서 음악을 트는 행위는 저작권법상 공연에 해당하며, 이에 따른 사용료가 \
					 공연권료입니다.",
				),
				section(
					Some("징수 대상 업종"),
					"노래연습장, 호텔·콘도, 골프장, 게임장, 항공기 등 업종별 기준에 따라 \
					 공연권료가 부과됩니다. KOSCAP 등 신탁단체별 몫은 고지서에 구분 표기됩니다.",
				),
			],
		),
		page(
			"privacy",
			"개인정보처리방침",
			vec![section(
				None,
				"수집된 개인정보는 상담 응대 및 공연권료 납부 안내 목적 외에는 사용되지 않으며, \
				 관련 법령에 따라 보관 후 파기됩니다.",
			)],
		),
	]
}

pub fn summaries() -> Vec<PageSummary> {
	catalog()
		.into_iter()
		.map(|p| PageSummary {
			slug: p.slug,
			title: p.title,
		})
		.collect()
}

pub fn find(slug: &str) -> Option<PageContent> {
	catalog().into_iter().find(|p| p.slug == slug)
}

fn page(slug: &str, title: &str, sections: Vec<PageSection>) -> PageContent {
	PageContent {
		slug: slug.to_string(),
		title: title.to_string(),
		sections,
	}
}

fn section(heading: Option<&str>, body: &str) -> PageSection {
	PageSection {
		heading: heading.map(str::to_string),
		body: body.to_string(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn catalog_slugs_are_unique() {
		let mut slugs: Vec<_> = catalog().into_iter().map(|p| p.slug).collect();
		let before = slugs.len();
		slugs.sort();
		slugs.dedup();
		assert_eq!(slugs.len(), before);
	}

	#[test]
	fn finds_known_page() {
		let page = find("fee-guide").unwrap();
		assert_eq!(page.title, "공연권료 안내");
		assert!(!page.sections.is_empty());
	}

	#[test]
	fn unknown_slug_is_none() {
		assert!(find("careers").is_none());
	}
}
