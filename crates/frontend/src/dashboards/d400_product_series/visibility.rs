use contracts::domain::a001_product::Metric;

/// Show/hide flags per metric. Presentation only; never triggers a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricVisibility {
    pub inventory: bool,
    pub procurement: bool,
    pub sales: bool,
}

impl Default for MetricVisibility {
    fn default() -> Self {
        Self {
            inventory: true,
            procurement: true,
            sales: true,
        }
    }
}

impl MetricVisibility {
    fn flag_mut(&mut self, metric: Metric) -> &mut bool {
        match metric {
            Metric::Inventory => &mut self.inventory,
            Metric::Procurement => &mut self.procurement,
            Metric::Sales => &mut self.sales,
        }
    }

    pub fn is_visible(&self, metric: Metric) -> bool {
        match metric {
            Metric::Inventory => self.inventory,
            Metric::Procurement => self.procurement,
            Metric::Sales => self.sales,
        }
    }

    pub fn toggle(&mut self, metric: Metric) {
        let flag = self.flag_mut(metric);
        *flag = !*flag;
    }

    pub fn visible_metrics(&self) -> Vec<Metric> {
        Metric::ALL
            .into_iter()
            .filter(|metric| self.is_visible(*metric))
            .collect()
    }
}
