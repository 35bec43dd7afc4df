use simuhub_calculator::built_in::business::{
    BREAK_EVEN_UNDEFINED, CAC_UNDEFINED, TIMEFRAME_UNDEFINED,
};
use simuhub_calculator::built_in::trees::SEQUENCE_UNDEFINED;
use simuhub_calculator::{ResultValue, SimulationOutput, catalog};
use simuhub_types::FieldValue;

fn compute_with(category: &str, id: &str, overrides: &[(&str, FieldValue)]) -> SimulationOutput {
    let definition = catalog().find(category, id).unwrap();
    let mut values = definition.default_values();
    for (key, value) in overrides {
        values.insert(key.to_string(), value.clone());
    }
    definition.compute(&values)
}

fn defaults(category: &str, id: &str) -> String {
    compute_with(category, id, &[]).to_string()
}

fn num(value: f64) -> FieldValue {
    FieldValue::Number(value)
}

fn primary_number(output: &SimulationOutput) -> f64 {
    output.primary().value.numeric().unwrap()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn acid_base_reaction_rounds_to_one_decimal() {
    assert_eq!(defaults("chemistry", "acid-base-reaction"), "pH: 0");

    let output = compute_with(
        "chemistry",
        "acid-base-reaction",
        &[
            ("acidConcentration", num(0.5)),
            ("baseConcentration", num(0.1)),
        ],
    );
    assert_eq!(output.to_string(), "pH: 0.4");

    // -22.5 rounds up to -22, not away from zero
    let output = compute_with(
        "chemistry",
        "acid-base-reaction",
        &[
            ("acidConcentration", num(1.0)),
            ("baseConcentration", num(3.25)),
        ],
    );
    assert_eq!(output.to_string(), "pH: -2.2");
}

#[test]
fn ideal_gas_law_uses_three_decimals() {
    let output = compute_with("chemistry", "ideal-gas-law", &[]);
    assert_close(primary_number(&output), 22.4 / (0.0821 * 273.0));
    assert_eq!(output.to_string(), "Moles of Gas: 0.999 mol");

    let output = compute_with("chemistry", "ideal-gas-law", &[("temperature", num(0.0))]);
    assert_eq!(output.to_string(), "Moles of Gas: Infinity mol");
}

#[test]
fn reaction_rate_uses_three_decimals() {
    assert_eq!(
        defaults("chemistry", "reaction-rate"),
        "Reaction Rate: 0.050 M/s"
    );
    let output = compute_with(
        "chemistry",
        "reaction-rate",
        &[
            ("changeInConcentration", num(0.0)),
            ("changeInTime", num(0.0)),
        ],
    );
    assert!(primary_number(&output).is_nan());

    // 0.0625 is an exact tie at three decimals
    let output = compute_with(
        "chemistry",
        "reaction-rate",
        &[
            ("changeInConcentration", num(0.0625)),
            ("changeInTime", num(1.0)),
        ],
    );
    assert_eq!(output.to_string(), "Reaction Rate: 0.063 M/s");
}

#[test]
fn remaining_chemistry_formulas() {
    assert_eq!(
        defaults("chemistry", "boiling-point-elevation"),
        "Boiling Point Elevation: 0.51 °C"
    );
    assert_eq!(
        defaults("chemistry", "enthalpy-change"),
        "Heat (q): 2090.00 J"
    );
    assert_eq!(
        defaults("chemistry", "molarity-calculation"),
        "Molarity: 1.00 M"
    );

    let output = compute_with(
        "chemistry",
        "molarity-calculation",
        &[("molesOfSolute", num(3.0)), ("volumeOfSolution", num(0.0))],
    );
    assert_eq!(output.to_string(), "Molarity: Infinity M");
}

#[test]
fn projectile_range_converts_degrees() {
    let output = compute_with("physics", "projectile-motion", &[]);
    assert_close(primary_number(&output), 100.0 / 9.81);
    assert_eq!(output.to_string(), "Range: 10.19 m");

    let output = compute_with("physics", "projectile-motion", &[("angle", num(0.0))]);
    assert_eq!(output.to_string(), "Range: 0.00 m");
}

#[test]
fn ohms_law_zero_resistance_is_infinite_not_an_error() {
    assert_eq!(defaults("physics", "ohms-law"), "Current: 2.00 A");

    let output = compute_with("physics", "ohms-law", &[("resistance", num(0.0))]);
    assert_eq!(primary_number(&output), f64::INFINITY);
    assert!(!output.primary().value.is_undefined());
    assert_eq!(output.to_string(), "Current: Infinity A");
}

#[test]
fn ohms_law_ties_round_up() {
    let output = compute_with(
        "physics",
        "ohms-law",
        &[("voltage", num(1.0)), ("resistance", num(8.0))],
    );
    assert_eq!(output.to_string(), "Current: 0.13 A");
}

#[test]
fn remaining_physics_formulas() {
    assert_eq!(
        defaults("physics", "kinetic-energy"),
        "Kinetic Energy: 50.00 J"
    );
    assert_eq!(
        defaults("physics", "newton-second-law"),
        "Acceleration: 5.00 m/s²"
    );

    let output = compute_with("physics", "gravitational-force", &[]);
    assert!((primary_number(&output) - 1.668575e-11).abs() < 1e-20);
    assert_eq!(output.to_string(), "Gravitational Force: 0.00 N");

    let output = compute_with("physics", "gravitational-force", &[("distance", num(0.0))]);
    assert!(primary_number(&output).is_infinite());

    let output = compute_with("physics", "newton-second-law", &[("mass", num(0.0))]);
    assert!(primary_number(&output).is_infinite());
}

#[test]
fn interest_formulas() {
    let output = compute_with("finance", "compound-interest", &[]);
    assert_close(primary_number(&output), 1000.0 * 1.05f64.powf(5.0));
    assert_eq!(output.to_string(), "Amount: 1276.28 $");

    assert_eq!(defaults("finance", "simple-interest"), "Interest: 250.00 $");
    let output = compute_with(
        "finance",
        "simple-interest",
        &[
            ("principal", num(2000.0)),
            ("rate", num(3.0)),
            ("time", num(2.0)),
        ],
    );
    assert_eq!(output.to_string(), "Interest: 120.00 $");
}

#[test]
fn loan_payment_zero_rate_is_nan() {
    assert_eq!(
        defaults("finance", "loan-payment"),
        "Monthly Payment: 188.71 $"
    );

    let output = compute_with("finance", "loan-payment", &[("interestRate", num(0.0))]);
    assert!(primary_number(&output).is_nan());
    assert_eq!(output.to_string(), "Monthly Payment: NaN $");
}

#[test]
fn remaining_finance_formulas() {
    assert_eq!(defaults("finance", "roi-calculator"), "ROI: 20.00%");
    let output = compute_with(
        "finance",
        "roi-calculator",
        &[
            ("initialInvestment", num(1000.0)),
            ("finalValue", num(1500.0)),
            ("additionalCosts", num(100.0)),
        ],
    );
    assert_eq!(output.to_string(), "ROI: 40.00%");

    let output = compute_with(
        "finance",
        "roi-calculator",
        &[("initialInvestment", num(0.0))],
    );
    assert!(primary_number(&output).is_infinite());

    assert_eq!(
        defaults("finance", "monthly-budget"),
        "Savings: 1500.00 $"
    );
    assert_eq!(
        defaults("finance", "savings-goal"),
        "Monthly Savings Needed: 416.67 $"
    );

    let output = compute_with("finance", "savings-goal", &[("timeFrame", num(0.0))]);
    assert_eq!(output.to_string(), "Monthly Savings Needed: Infinity $");
}

#[test]
fn monthly_budget_follows_browser_rendering() {
    let budget = |income: f64| {
        let overrides = [("income", num(income)), ("expenses", num(0.0))];
        compute_with("finance", "monthly-budget", &overrides).to_string()
    };
    assert_eq!(budget(0.625), "Savings: 0.63 $");
    assert_eq!(budget(1e21), "Savings: 1e+21 $");
    assert_eq!(budget(-0.125), "Savings: -0.13 $");
}

#[test]
fn break_even_guard() {
    assert_eq!(
        defaults("business-strategies", "break-even-analysis"),
        "Break-Even Point: 200.00 units"
    );

    let output = compute_with(
        "business-strategies",
        "break-even-analysis",
        &[("sellingPrice", num(5.0)), ("variableCosts", num(5.0))],
    );
    assert_eq!(
        output.primary().value,
        ResultValue::Undefined {
            message: BREAK_EVEN_UNDEFINED
        }
    );
    assert_eq!(
        output.to_string(),
        "Break-Even Point: Undefined (Selling Price must be greater than Variable Costs) units"
    );
}

#[test]
fn customer_acquisition_cost_guard() {
    assert_eq!(
        defaults("business-strategies", "customer-acquisition-cost"),
        "Customer Acquisition Cost: 20.00 $"
    );
    let output = compute_with(
        "business-strategies",
        "customer-acquisition-cost",
        &[("newCustomers", num(0.0))],
    );
    assert_eq!(
        output.primary().value,
        ResultValue::Undefined {
            message: CAC_UNDEFINED
        }
    );
}

#[test]
fn breakeven_timeframe_guard() {
    assert_eq!(
        defaults("business-strategies", "breakeven-timeframe"),
        "Break-Even Timeframe: 5.00 months"
    );
    let output = compute_with(
        "business-strategies",
        "breakeven-timeframe",
        &[("monthlySales", num(0.0))],
    );
    assert_eq!(
        output.primary().value,
        ResultValue::Undefined {
            message: TIMEFRAME_UNDEFINED
        }
    );
    assert_eq!(
        output.to_string(),
        "Break-Even Timeframe: Undefined (Monthly Sales cannot be 0) months"
    );
}

#[test]
fn profit_margin_and_npv() {
    assert_eq!(
        defaults("business-strategies", "profit-margin"),
        "Profit Margin: 40.00%"
    );
    let output = compute_with(
        "business-strategies",
        "profit-margin",
        &[("revenue", num(0.0))],
    );
    assert_eq!(output.to_string(), "Profit Margin: -Infinity%");

    let output = compute_with("business-strategies", "net-present-value", &[]);
    assert_close(
        primary_number(&output),
        5000.0 / 1.05f64.powf(5.0) - 10000.0,
    );
    assert_eq!(output.to_string(), "Net Present Value: -6082.37 $");
}

#[test]
fn roi_analysis_reads_declared_return_field() {
    assert_eq!(
        defaults("business-strategies", "roi-analysis"),
        "ROI: 20.00%"
    );
    let output = compute_with(
        "business-strategies",
        "roi-analysis",
        &[("return", num(9000.0))],
    );
    assert_eq!(output.to_string(), "ROI: -10.00%");
}

#[test]
fn tree_depth_is_guarded() {
    assert_eq!(
        defaults("decision-trees", "binary-tree-depth"),
        "Tree Depth: 4 levels"
    );
    let depth = |nodes: f64| {
        let overrides = [("nodes", num(nodes))];
        let output = compute_with("decision-trees", "binary-tree-depth", &overrides);
        primary_number(&output)
    };
    assert_eq!(depth(1.0), 1.0);
    assert_eq!(depth(16.0), 5.0);
    assert_eq!(depth(0.0), 0.0);
    assert_eq!(depth(-3.0), 0.0);
}

#[test]
fn preorder_check_through_the_catalog() {
    let check = |sequence: &str| {
        let overrides = [("sequence", FieldValue::Text(sequence.to_string()))];
        let output = compute_with("decision-trees", "binary-search-tree-check", &overrides);
        output.primary().value.clone()
    };
    assert_eq!(
        defaults("decision-trees", "binary-search-tree-check"),
        "Valid BST Preorder: Yes"
    );
    assert_eq!(check("8,5,1,7,10,12"), ResultValue::Flag { value: true });
    assert_eq!(check("5,8,1"), ResultValue::Flag { value: false });
    assert_eq!(check(""), ResultValue::Flag { value: true });
    assert_eq!(check("7"), ResultValue::Flag { value: true });
    assert_eq!(check("5, 5, 5"), ResultValue::Flag { value: true });
    assert_eq!(
        check("5,eight"),
        ResultValue::Undefined {
            message: SEQUENCE_UNDEFINED
        }
    );
}

#[test]
fn remaining_tree_formulas() {
    assert_eq!(
        defaults("decision-trees", "tree-node-count"),
        "Maximum Nodes: 15"
    );
    assert_eq!(
        defaults("decision-trees", "tree-traversal-steps"),
        "Traversal Steps: 13"
    );
    let output = compute_with(
        "decision-trees",
        "tree-traversal-steps",
        &[("nodes", num(0.0))],
    );
    assert_eq!(output.to_string(), "Traversal Steps: 0");

    assert_eq!(
        defaults("decision-trees", "balanced-tree-check"),
        "Minimum Height: 3\nMaximum Height: 7"
    );

    assert_eq!(
        defaults("decision-trees", "minimum-tree-height"),
        "Minimum Height: 3"
    );
    let output = compute_with(
        "decision-trees",
        "minimum-tree-height",
        &[("nodes", num(8.0))],
    );
    assert_eq!(output.to_string(), "Minimum Height: 4");
}

#[test]
fn huge_node_counts_switch_to_exponent_form() {
    let output = compute_with(
        "decision-trees",
        "tree-node-count",
        &[("height", num(70.0))],
    );
    assert_eq!(output.to_string(), "Maximum Nodes: 1.1805916207174113e+21");
}

#[test]
fn every_simulation_is_idempotent() {
    for (_, definition) in catalog().iter() {
        let values = definition.default_values();
        let first = definition.compute(&values);
        let second = definition.compute(&values);
        assert_eq!(first.to_string(), second.to_string(), "{}", definition.id);
    }
}

#[test]
fn every_simulation_is_total_over_degenerate_numbers() {
    for (_, definition) in catalog().iter() {
        for edge in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let mut values = definition.default_values();
            for field in &definition.inputs {
                if field.default_value.as_number().is_some() {
                    values.insert(field.id.to_string(), num(edge));
                }
            }
            let output = definition.compute(&values);
            assert!(!output.to_string().is_empty(), "{}", definition.id);
        }
    }
}
